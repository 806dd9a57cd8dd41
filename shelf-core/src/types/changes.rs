//! Partial updates to an existing book

use super::{Rating, Status};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Untrusted update payload as decoded from a request body
///
/// A field that is absent from the JSON stays `None` and leaves the stored
/// value alone. `publish_date` distinguishes three states: absent (`None`),
/// `null` (`Some(None)`, clears the date) and a timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub publish_date: Option<Option<DateTime<Utc>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u8>,
}

impl BookPatch {
    /// Check any supplied rating and status
    pub fn validate(self) -> Result<BookChanges> {
        let rating = self.rating.map(Rating::try_from).transpose()?;
        let status = self.status.map(Status::try_from).transpose()?;

        Ok(BookChanges {
            title: self.title,
            author: self.author,
            publisher: self.publisher,
            publish_date: self.publish_date,
            rating,
            status,
        })
    }
}

/// Validated set of field overwrites for [`crate::Library::modify`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub publisher: Option<String>,
    pub publish_date: Option<Option<DateTime<Utc>>>,
    pub rating: Option<Rating>,
    pub status: Option<Status>,
}

impl BookChanges {
    /// True when applying these changes would leave a book as it was
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;

    #[test]
    fn test_absent_fields_stay_none() {
        let patch: BookPatch = serde_json::from_str(r#"{"title":"New"}"#).unwrap();
        let changes = patch.validate().unwrap();

        assert_eq!(changes.title.as_deref(), Some("New"));
        assert_eq!(changes.author, None);
        assert_eq!(changes.publish_date, None);
        assert_eq!(changes.rating, None);
    }

    #[test]
    fn test_null_publish_date_clears() {
        let patch: BookPatch = serde_json::from_str(r#"{"publish_date":null}"#).unwrap();
        assert_eq!(patch.publish_date, Some(None));
    }

    #[test]
    fn test_empty_string_is_a_change() {
        let patch: BookPatch = serde_json::from_str(r#"{"publisher":""}"#).unwrap();
        let changes = patch.validate().unwrap();
        assert_eq!(changes.publisher.as_deref(), Some(""));
        assert!(!changes.is_empty());
    }

    #[test]
    fn test_zero_rating_is_rejected_not_ignored() {
        let patch: BookPatch = serde_json::from_str(r#"{"rating":0}"#).unwrap();
        assert_eq!(patch.validate().unwrap_err(), ShelfError::InvalidRating(0));
    }

    #[test]
    fn test_bad_status_is_rejected() {
        let patch = BookPatch {
            status: Some(9),
            ..Default::default()
        };
        assert_eq!(patch.validate().unwrap_err(), ShelfError::InvalidStatus(9));
    }

    #[test]
    fn test_empty_patch() {
        let changes = BookPatch::default().validate().unwrap();
        assert!(changes.is_empty());
    }
}
