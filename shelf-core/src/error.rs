//! Error types for Shelf Core

use thiserror::Error;
use uuid::Uuid;

/// Result type alias using ShelfError
pub type Result<T> = std::result::Result<T, ShelfError>;

/// Errors returned by the library and by record validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShelfError {
    #[error("no book with id {0}")]
    NotFound(Uuid),

    #[error("invalid rating {0}: must be between 1 and 3")]
    InvalidRating(u8),

    #[error("invalid status {0}: must be 0 (checked in) or 1 (checked out)")]
    InvalidStatus(u8),
}
