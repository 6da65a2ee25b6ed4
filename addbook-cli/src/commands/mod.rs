//! CLI command implementations

mod add;
mod check;
mod options;

pub use add::add;
pub use check::check;
pub use options::options;

use addbook_core::{Field, FieldErrors};

/// Print inline field errors, one per line
fn print_field_errors(errors: &FieldErrors) {
    for field in Field::ALL {
        if let Some(error) = errors.get(field) {
            eprintln!("  {}: {}", field.label(), error);
        }
    }
}
