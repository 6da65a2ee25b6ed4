//! Form state holder: values, touched flags, errors and the pending guard

use crate::error::SubmitError;
use crate::schema::{self, Field, FieldError, FieldErrors};
use crate::types::{BookDraft, NewBook};

/// State of one input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub error: Option<FieldError>,
}

impl FieldState {
    /// The error to display: only touched fields show theirs
    pub fn visible_error(&self) -> Option<&FieldError> {
        if self.touched {
            self.error.as_ref()
        } else {
            None
        }
    }
}

/// Input events produced by the UI surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: Field, value: String },
    Blur(Field),
    Submit,
}

/// Owns every piece of mutable form state
#[derive(Debug, Clone, Default)]
pub struct FormState {
    fields: [FieldState; 3],
    pending: bool,
}

fn slot(field: Field) -> usize {
    match field {
        Field::Title => 0,
        Field::Author => 1,
        Field::Status => 2,
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[slot(field)]
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        &mut self.fields[slot(field)]
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    /// Controlled-input update; re-validates the changed field
    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        let state = self.field_mut(field);
        state.value = value.into();
        state.error = schema::validate_field(field, &state.value);
    }

    /// Focus left the input
    pub fn set_field_touched(&mut self, field: Field) {
        let state = self.field_mut(field);
        state.touched = true;
        state.error = schema::validate_field(field, &state.value);
    }

    pub fn visible_error(&self, field: Field) -> Option<&FieldError> {
        self.field(field).visible_error()
    }

    /// Errors recorded so far (touched or not)
    pub fn errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for field in Field::ALL {
            errors.set(field, self.field(field).error.clone());
        }
        errors
    }

    /// Snapshot of the current values
    pub fn draft(&self) -> BookDraft {
        BookDraft::new(
            self.value(Field::Title),
            self.value(Field::Author),
            self.value(Field::Status),
        )
    }

    /// Whether the current values would pass validation
    pub fn is_valid(&self) -> bool {
        schema::validate(&self.draft()).is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.pending
    }

    /// Start a submission
    ///
    /// Marks every field touched and re-validates all of them. On success the
    /// form is pending until [`FormState::finish_submit`] is called.
    pub fn begin_submit(&mut self) -> Result<NewBook, SubmitError> {
        if self.pending {
            return Err(SubmitError::AlreadyPending);
        }

        for field in Field::ALL {
            self.set_field_touched(field);
        }

        let book = schema::validated(&self.draft()).map_err(SubmitError::Invalid)?;
        self.pending = true;
        Ok(book)
    }

    /// Release the pending guard
    pub fn finish_submit(&mut self) {
        self.pending = false;
    }

    /// Clear values, touched flags and errors
    pub fn reset_fields(&mut self) {
        for field in Field::ALL {
            *self.field_mut(field) = FieldState::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookStatus;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set_field_value(Field::Title, "Readers");
        form.set_field_value(Field::Author, "Writerly");
        form.set_field_value(Field::Status, "Available");
        form
    }

    #[test]
    fn test_initial_state() {
        let form = FormState::new();
        for field in Field::ALL {
            let state = form.field(field);
            assert_eq!(state.value, "");
            assert!(!state.touched);
            assert_eq!(state.error, None);
        }
        assert!(form.can_submit());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_error_hidden_until_touched() {
        let mut form = FormState::new();
        form.set_field_value(Field::Title, "Tiny");

        assert!(form.field(Field::Title).error.is_some());
        assert_eq!(form.visible_error(Field::Title), None);

        form.set_field_touched(Field::Title);
        assert_eq!(
            form.visible_error(Field::Title).map(|e| e.to_string()),
            Some("title must be at least 6 characters".to_string())
        );
        // Other fields stay quiet
        assert_eq!(form.visible_error(Field::Author), None);
    }

    #[test]
    fn test_error_recomputed_on_change() {
        let mut form = FormState::new();
        form.set_field_touched(Field::Author);
        assert_eq!(
            form.visible_error(Field::Author),
            Some(&FieldError::Required(Field::Author))
        );

        form.set_field_value(Field::Author, "Writerly");
        assert_eq!(form.visible_error(Field::Author), None);
    }

    #[test]
    fn test_begin_submit_invalid_touches_everything() {
        let mut form = FormState::new();
        form.set_field_value(Field::Title, "Readers");

        let err = form.begin_submit().unwrap_err();
        match err {
            SubmitError::Invalid(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.get(Field::Title).is_none());
            }
            other => panic!("unexpected error: {other:?}"),
        }

        for field in Field::ALL {
            assert!(form.field(field).touched);
        }
        assert!(form.visible_error(Field::Author).is_some());
        assert!(form.visible_error(Field::Status).is_some());
        assert!(!form.is_pending());
        // Values are untouched by a blocked submit
        assert_eq!(form.value(Field::Title), "Readers");
    }

    #[test]
    fn test_begin_submit_sets_pending() {
        let mut form = filled();
        let book = form.begin_submit().unwrap();
        assert_eq!(book.status, BookStatus::Available);
        assert!(form.is_pending());
        assert!(!form.can_submit());

        assert!(matches!(
            form.begin_submit(),
            Err(SubmitError::AlreadyPending)
        ));

        form.finish_submit();
        assert!(form.can_submit());
    }

    #[test]
    fn test_reset_fields() {
        let mut form = filled();
        form.set_field_touched(Field::Title);
        form.reset_fields();

        assert_eq!(form.draft(), BookDraft::default());
        assert!(!form.field(Field::Title).touched);
        assert!(form.errors().is_empty());
    }
}
