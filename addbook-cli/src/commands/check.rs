//! Check command implementation

use super::print_field_errors;
use addbook_core::{validate, BookDraft};
use anyhow::{bail, Result};

/// Validate a draft offline
pub fn check(draft: &BookDraft, json: bool) -> Result<()> {
    let errors = validate(draft);

    if json {
        println!("{}", serde_json::to_string_pretty(&errors)?);
    } else if errors.is_empty() {
        println!("Valid book");
        println!("  Title: {}", draft.title);
        println!("  Author: {}", draft.author);
        println!("  Status: {}", draft.status);
    } else {
        print_field_errors(&errors);
    }

    if !errors.is_empty() {
        bail!("{} invalid field(s)", errors.len());
    }
    Ok(())
}
