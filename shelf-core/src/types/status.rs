//! Bounded scalar fields of a book: rating and lending status

use crate::error::ShelfError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reader rating between 1 and 3 inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// The numeric value of the rating
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = ShelfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ShelfError::InvalidRating(value))
        }
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a book is on the shelf or lent out
///
/// Serialized as its integer discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Status {
    #[default]
    CheckedIn = 0,
    CheckedOut = 1,
}

impl TryFrom<u8> for Status {
    type Error = ShelfError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Status::CheckedIn),
            1 => Ok(Status::CheckedOut),
            other => Err(ShelfError::InvalidStatus(other)),
        }
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> Self {
        status as u8
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::CheckedIn => "checked in",
            Status::CheckedOut => "checked out",
        };
        write!(f, "{}", label)
    }
}
