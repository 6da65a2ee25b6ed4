//! Field schema and validator for the "Add Book" record
//!
//! Validation is a pure function of the draft: it never touches form state.

use crate::types::{BookDraft, BookStatus, NewBook};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Minimum title/author length, in characters
pub const MIN_TEXT_LEN: usize = 6;

/// Maximum title/author length, in characters
pub const MAX_TEXT_LEN: usize = 50;

/// The three inputs of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Author,
    Status,
}

impl Field {
    /// All fields, in display order
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Status];

    /// Name used on the wire and in error messages
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Status => "status",
        }
    }

    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Field::Title => "Title",
            Field::Author => "Author Name",
            Field::Status => "Book Status",
        }
    }

    /// Look a field up by its wire name
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Read this field's value out of a draft
    pub fn value_in<'a>(&self, draft: &'a BookDraft) -> &'a str {
        match self {
            Field::Title => &draft.title,
            Field::Author => &draft.author,
            Field::Status => &draft.status,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single field's validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is a required field")]
    Required(Field),

    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: Field, max: usize },
}

impl FieldError {
    /// The field this error belongs to
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::TooShort { field, .. } | FieldError::TooLong { field, .. } => *field,
        }
    }

    /// True for the length family of errors
    pub fn is_length(&self) -> bool {
        matches!(self, FieldError::TooShort { .. } | FieldError::TooLong { .. })
    }
}

/// Mapping from field to its error; a valid field has no entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    /// Record (or clear, when `error` is `None`) the error for one field
    pub fn set(&mut self, field: Field, error: Option<FieldError>) {
        match error {
            Some(error) => {
                self.0.insert(field, error);
            }
            None => {
                self.0.remove(&field);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }
}

impl Serialize for FieldErrors {
    /// Serialized as `{ "<field name>": "<message>" }`
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, error) in &self.0 {
            map.serialize_entry(field.name(), &error.to_string())?;
        }
        map.end()
    }
}

/// Validate a single value against its field's rules
pub fn validate_field(field: Field, value: &str) -> Option<FieldError> {
    match field {
        Field::Title | Field::Author => check_text(field, value),
        Field::Status => value
            .parse::<BookStatus>()
            .err()
            .map(|_| FieldError::Required(field)),
    }
}

fn check_text(field: Field, value: &str) -> Option<FieldError> {
    if value.is_empty() {
        return Some(FieldError::Required(field));
    }

    let len = value.chars().count();
    if len < MIN_TEXT_LEN {
        Some(FieldError::TooShort {
            field,
            min: MIN_TEXT_LEN,
        })
    } else if len > MAX_TEXT_LEN {
        Some(FieldError::TooLong {
            field,
            max: MAX_TEXT_LEN,
        })
    } else {
        None
    }
}

/// Validate a whole draft
pub fn validate(draft: &BookDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for field in Field::ALL {
        errors.set(field, validate_field(field, field.value_in(draft)));
    }
    errors
}

/// Turn a draft into a request payload, or report every invalid field
pub fn validated(draft: &BookDraft) -> Result<NewBook, FieldErrors> {
    let errors = validate(draft);
    if !errors.is_empty() {
        return Err(errors);
    }

    let status = draft
        .status
        .parse::<BookStatus>()
        .map_err(|_| {
            let mut errors = FieldErrors::new();
            errors.set(Field::Status, Some(FieldError::Required(Field::Status)));
            errors
        })?;

    Ok(NewBook {
        title: draft.title.clone(),
        author: draft.author.clone(),
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required_messages() {
        let errors = validate(&BookDraft::default());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(Field::Title).unwrap().to_string(),
            "title is a required field"
        );
        assert_eq!(
            errors.get(Field::Author).unwrap().to_string(),
            "author is a required field"
        );
        assert_eq!(
            errors.get(Field::Status).unwrap().to_string(),
            "status is a required field"
        );
    }

    #[test]
    fn test_length_messages() {
        assert_eq!(
            validate_field(Field::Title, "Short").unwrap().to_string(),
            "title must be at least 6 characters"
        );
        assert_eq!(
            validate_field(Field::Author, &"a".repeat(51))
                .unwrap()
                .to_string(),
            "author must be at most 50 characters"
        );
    }

    #[test]
    fn test_length_bounds_inclusive() {
        assert_eq!(validate_field(Field::Title, "Readers"), None);
        assert_eq!(validate_field(Field::Title, "Sixsix"), None);
        assert_eq!(validate_field(Field::Title, &"x".repeat(50)), None);
        assert!(validate_field(Field::Title, "Fivex").unwrap().is_length());
    }

    #[test]
    fn test_length_counts_characters() {
        // Six characters, twelve bytes
        assert_eq!(validate_field(Field::Author, "éééééé"), None);
        // Fifty characters, well over fifty bytes
        assert_eq!(validate_field(Field::Author, &"ß".repeat(50)), None);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(validate_field(Field::Title, "      "), None);
        assert!(validate_field(Field::Title, " ab ").is_some());
    }

    #[test]
    fn test_status_options() {
        assert_eq!(validate_field(Field::Status, "Available"), None);
        assert_eq!(validate_field(Field::Status, "Already Booked"), None);
        assert_eq!(
            validate_field(Field::Status, "Lost"),
            Some(FieldError::Required(Field::Status))
        );
        assert_eq!(
            validate_field(Field::Status, "available"),
            Some(FieldError::Required(Field::Status))
        );
    }

    #[test]
    fn test_validated_payload() {
        let draft = BookDraft::new("Readers", "Writerly", "Already Booked");
        let book = validated(&draft).unwrap();
        assert_eq!(book.title, "Readers");
        assert_eq!(book.author, "Writerly");
        assert_eq!(book.status, BookStatus::AlreadyBooked);

        let errors = validated(&BookDraft::new("", "Writerly", "Available")).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::Title),
            Some(&FieldError::Required(Field::Title))
        );
    }

    #[test]
    fn test_errors_serialize_by_name() {
        let errors = validate(&BookDraft::new("Tiny", "Writerly", ""));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "title must be at least 6 characters",
                "status": "status is a required field",
            })
        );
    }

    #[test]
    fn test_field_lookup() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("isbn"), None);
        assert_eq!(Field::Author.label(), "Author Name");
    }

    proptest! {
        #[test]
        fn prop_in_range_text_is_valid(value in "[a-zA-Z0-9 ]{6,50}") {
            prop_assert_eq!(validate_field(Field::Title, &value), None);
            prop_assert_eq!(validate_field(Field::Author, &value), None);
        }

        #[test]
        fn prop_short_text_fails(value in "[a-zA-Z0-9 ]{1,5}") {
            prop_assert_eq!(
                validate_field(Field::Title, &value),
                Some(FieldError::TooShort { field: Field::Title, min: MIN_TEXT_LEN })
            );
        }

        #[test]
        fn prop_long_text_fails(value in "[a-zA-Z0-9 ]{51,120}") {
            prop_assert_eq!(
                validate_field(Field::Author, &value),
                Some(FieldError::TooLong { field: Field::Author, max: MAX_TEXT_LEN })
            );
        }

        #[test]
        fn prop_unknown_status_fails(value in "\\PC{0,20}") {
            prop_assume!(value != "Available" && value != "Already Booked");
            prop_assert!(validate_field(Field::Status, &value).is_some());
        }
    }
}
