//! AddBook Core Library
//!
//! Headless implementation of an "Add Book" form: a field schema and
//! validator, a form state holder, a submission handler that posts the record
//! to a remote endpoint, and a feedback presenter that shows a transient
//! banner with the outcome.

pub mod component;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod feedback;
pub mod form;
pub mod schema;
pub mod types;

pub use component::{AddBookForm, HEADING};
pub use config::AddBookConfig;
pub use endpoint::{BookEndpoint, HttpBookEndpoint, TransportResult};
pub use error::{ConfigError, Result, SubmitError, TransportError};
pub use feedback::{Banner, BannerKind, FeedbackPresenter, DEFAULT_BANNER_DURATION};
pub use form::{FieldState, FormEvent, FormState};
pub use schema::{validate, validate_field, validated, Field, FieldError, FieldErrors};
pub use types::{BookDraft, BookStatus, NewBook, SubmissionResult};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_is_invalid() {
        let form = FormState::new();
        assert_eq!(validate(&form.draft()).len(), 3);
    }
}
