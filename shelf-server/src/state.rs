//! Application state

use shelf_core::Library;
use std::sync::Arc;

/// Shared application state
///
/// Built once at startup; every handler sees the same library.
#[derive(Clone, Default)]
pub struct AppState {
    pub library: Arc<Library>,
}

impl AppState {
    /// Wrap a library for sharing across handlers
    pub fn new(library: Library) -> Self {
        Self {
            library: Arc::new(library),
        }
    }
}
