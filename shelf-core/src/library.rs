//! In-memory book store
//!
//! Every operation holds the lock for its whole duration and callers only
//! ever receive clones, so no caller can observe or cause a half-applied
//! change.

use crate::error::{Result, ShelfError};
use crate::types::{Book, BookChanges};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// The collection of books, keyed by identifier
#[derive(Debug, Default)]
pub struct Library {
    books: RwLock<HashMap<Uuid, Book>>,
}

impl Library {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    // No operation leaves the map half-written, so a poisoned lock is
    // still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Uuid, Book>> {
        self.books.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Uuid, Book>> {
        self.books.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// All books, sorted by title
    pub fn list(&self) -> Vec<Book> {
        let mut books: Vec<Book> = self.read().values().cloned().collect();
        sort_books(&mut books);
        books
    }

    /// Insert a book, replacing any existing entry with the same id
    pub fn add(&self, book: Book) {
        self.write().insert(book.id, book);
    }

    /// Look up a single book
    pub fn get_by_id(&self, id: Uuid) -> Result<Book> {
        self.read()
            .get(&id)
            .cloned()
            .ok_or(ShelfError::NotFound(id))
    }

    /// Remove a book and hand it back
    pub fn delete_by_id(&self, id: Uuid) -> Result<Book> {
        self.write().remove(&id).ok_or(ShelfError::NotFound(id))
    }

    /// Overwrite the fields present in `changes` and return the result
    pub fn modify(&self, id: Uuid, changes: BookChanges) -> Result<Book> {
        let mut books = self.write();
        let book = books.get_mut(&id).ok_or(ShelfError::NotFound(id))?;
        book.apply(changes);
        Ok(book.clone())
    }

    /// Number of books held
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort by title, falling back to the id so equal titles have a fixed order
fn sort_books(books: &mut [Book]) {
    books.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
}
