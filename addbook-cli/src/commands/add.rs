//! Add command implementation

use super::print_field_errors;
use addbook_core::{
    AddBookConfig, AddBookForm, Banner, BookDraft, Field, HttpBookEndpoint, SubmitError, HEADING,
};
use anyhow::{bail, Context, Result};
use std::sync::Arc;

/// Fill the form, submit it and render the outcome
pub async fn add(config: &AddBookConfig, draft: BookDraft, wait: bool) -> Result<()> {
    let endpoint =
        HttpBookEndpoint::from_config(config).context("Failed to create HTTP client")?;
    tracing::debug!("Using endpoint {}", endpoint.url());

    let form = AddBookForm::with_config(Arc::new(endpoint), config);
    println!("{}", HEADING);

    // Type into each control, then leave it
    for field in Field::ALL {
        form.set_field_value(field, field.value_in(&draft));
        form.set_field_touched(field);
    }

    let outcome = form.submit().await;
    render_banner(&form.banner());

    if wait {
        let mut banner = form.subscribe_banner();
        let _ = banner.wait_for(|banner| !banner.is_visible()).await;
        tracing::debug!("Banner hidden");
    }

    match outcome {
        Ok(result) if result.success => Ok(()),
        Ok(result) => bail!("Book rejected: {}", result.message),
        Err(SubmitError::Invalid(_)) => {
            print_field_errors(&form.visible_errors());
            bail!("Book not submitted: fix the fields above");
        }
        Err(err) => Err(err).context("Submission failed"),
    }
}

fn render_banner(banner: &Banner) {
    if let (Some(kind), Some(message)) = (banner.kind(), banner.message()) {
        println!("[{}] {}", kind, message);
    }
}
