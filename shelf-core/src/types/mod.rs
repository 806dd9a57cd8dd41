//! Book record types

mod book;
mod changes;
mod status;

pub use book::{Book, NewBook};
pub use changes::{BookChanges, BookPatch};
pub use status::{Rating, Status};
