//! Shelf Core Library
//!
//! Book records, their validation, and the in-memory library that stores
//! them. The HTTP layer lives in `shelf-server`.

pub mod error;
pub mod library;
pub mod types;

pub use error::{Result, ShelfError};
pub use library::Library;
pub use types::{Book, BookChanges, BookPatch, NewBook, Rating, Status};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("Test Book", Rating::try_from(1).unwrap());
        assert_eq!(book.title, "Test Book");
        assert_eq!(book.status, Status::CheckedIn);
    }
}
