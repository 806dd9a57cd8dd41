//! The Book record and the payload used to create one

use super::{BookChanges, Rating, Status};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A book held by the library
///
/// Empty strings and a missing publish date are left out of the JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier, assigned on creation and never changed
    pub id: Uuid,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub publisher: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<DateTime<Utc>>,

    pub rating: Rating,

    pub status: Status,
}

impl Book {
    /// Create a checked-in book with a fresh identifier
    pub fn new(title: impl Into<String>, rating: Rating) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            author: String::new(),
            publisher: String::new(),
            publish_date: None,
            rating,
            status: Status::CheckedIn,
        }
    }

    /// Set author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set publisher
    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    /// Set publication date
    pub fn with_publish_date(mut self, date: DateTime<Utc>) -> Self {
        self.publish_date = Some(date);
        self
    }

    /// Set status
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// Overwrite every field that is present in `changes`
    ///
    /// The identifier is never touched.
    pub fn apply(&mut self, changes: BookChanges) {
        let BookChanges {
            title,
            author,
            publisher,
            publish_date,
            rating,
            status,
        } = changes;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(author) = author {
            self.author = author;
        }
        if let Some(publisher) = publisher {
            self.publisher = publisher;
        }
        if let Some(publish_date) = publish_date {
            self.publish_date = publish_date;
        }
        if let Some(rating) = rating {
            self.rating = rating;
        }
        if let Some(status) = status {
            self.status = status;
        }
    }
}

/// Untrusted create payload as decoded from a request body
///
/// Rating and status arrive as raw integers and are checked by
/// [`NewBook::validate`]. A missing rating decodes as 0 and is rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub publisher: String,

    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub rating: u8,

    #[serde(default)]
    pub status: u8,
}

impl NewBook {
    /// Check rating and status and build a book with a new identifier
    pub fn validate(self) -> Result<Book> {
        let rating = Rating::try_from(self.rating)?;
        let status = Status::try_from(self.status)?;

        Ok(Book {
            id: Uuid::new_v4(),
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publish_date: self.publish_date,
            rating,
            status,
        })
    }
}
