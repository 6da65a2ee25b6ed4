//! Record types exchanged between the form and the book endpoint

mod book;
mod envelope;

pub use book::{BookDraft, BookStatus, NewBook, UnknownStatus};
pub use envelope::SubmissionResult;
