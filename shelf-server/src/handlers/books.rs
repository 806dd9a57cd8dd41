//! Book CRUD handlers

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use shelf_core::{Book, BookPatch, NewBook};
use uuid::Uuid;

/// Path id extractor; a malformed UUID becomes a 400 before the body is read
type BookId = WithRejection<Path<Uuid>, ApiError>;

/// List all books, sorted by title
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    let books = state.library.list();
    tracing::debug!(count = books.len(), "listing books");
    Json(books)
}

/// Add a new book
///
/// The identifier is generated here and returned in the `Location` header.
pub async fn create_book(
    State(state): State<AppState>,
    WithRejection(Json(payload), _): WithRejection<Json<NewBook>, ApiError>,
) -> ApiResult<impl IntoResponse> {
    let book = payload.validate()?;
    let id = book.id;

    state.library.add(book);
    tracing::info!(%id, "book added");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/books/{}", id))],
    ))
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): BookId,
) -> ApiResult<Json<Book>> {
    let book = state.library.get_by_id(id)?;
    tracing::debug!(%id, "book fetched");
    Ok(Json(book))
}

/// Change the fields present in the body; the id always comes from the path
pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): BookId,
    WithRejection(Json(patch), _): WithRejection<Json<BookPatch>, ApiError>,
) -> ApiResult<StatusCode> {
    let changes = patch.validate()?;
    state.library.modify(id, changes)?;
    tracing::info!(%id, "book modified");
    Ok(StatusCode::ACCEPTED)
}

/// Remove a book
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): BookId,
) -> ApiResult<StatusCode> {
    let removed = state.library.delete_by_id(id)?;
    tracing::info!(%id, title = %removed.title, "book deleted");
    Ok(StatusCode::ACCEPTED)
}
