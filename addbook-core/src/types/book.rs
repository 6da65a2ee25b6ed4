//! The book record, as typed by the user and as sent over the wire

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Availability of a book
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BookStatus {
    #[serde(rename = "Available")]
    Available,

    #[serde(rename = "Already Booked")]
    AlreadyBooked,
}

impl BookStatus {
    /// Options offered by the status selector, in display order
    pub const ALL: [BookStatus; 2] = [BookStatus::Available, BookStatus::AlreadyBooked];

    /// Wire/display text
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::AlreadyBooked => "Already Booked",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status string is not one of the selector options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown book status {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookStatus {
    type Err = UnknownStatus;

    /// Exact, case-sensitive match against the option text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// The in-progress record a user is composing
///
/// Every field is raw text, exactly as entered. An empty `status` means
/// nothing has been selected yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub status: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status: status.into(),
        }
    }
}

/// Request body for `POST /book`
///
/// Only obtainable from a draft that passed validation
/// (see [`crate::schema::validated`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}
