//! Options command implementation

use addbook_core::{schema, BookStatus, Field};
use anyhow::Result;

/// List fields and status choices
pub fn options() -> Result<()> {
    println!("Fields:");
    for field in Field::ALL {
        match field {
            Field::Status => println!("  --{:<8} {}", field.name(), field.label()),
            _ => println!(
                "  --{:<8} {} ({}-{} characters)",
                field.name(),
                field.label(),
                schema::MIN_TEXT_LEN,
                schema::MAX_TEXT_LEN
            ),
        }
    }

    println!("Status options:");
    for status in BookStatus::ALL {
        println!("  {}", status);
    }
    Ok(())
}
