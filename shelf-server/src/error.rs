//! HTTP error mapping

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shelf_core::ShelfError;
use thiserror::Error;

/// Errors a handler can return to the caller
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("the given id was not a valid UUID: {0}")]
    MalformedId(String),

    #[error("the request body was invalid: {0}")]
    MalformedBody(String),

    #[error(transparent)]
    Shelf(#[from] ShelfError),
}

impl ApiError {
    /// Status code sent back for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedId(_) | ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Shelf(ShelfError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Shelf(ShelfError::InvalidRating(_) | ShelfError::InvalidStatus(_)) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedId(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for handlers
pub type ApiResult<T> = Result<T, ApiError>;
