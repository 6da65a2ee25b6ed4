//! The "Add Book" form: state holder, submission handler and feedback wired together

use crate::config::AddBookConfig;
use crate::endpoint::BookEndpoint;
use crate::error::{Result, SubmitError};
use crate::feedback::{Banner, BannerKind, FeedbackPresenter};
use crate::form::{FieldState, FormEvent, FormState};
use crate::schema::{Field, FieldError, FieldErrors};
use crate::types::{BookDraft, SubmissionResult};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

/// Heading shown above the form
pub const HEADING: &str = "Add Book";

/// One form instance
///
/// All methods take `&self` so the form can be shared between the input
/// handlers and an in-flight submission. The state lock is never held across
/// an await point. Dropping the form closes it.
pub struct AddBookForm {
    state: Mutex<FormState>,
    feedback: FeedbackPresenter,
    endpoint: Arc<dyn BookEndpoint>,
    closed: watch::Sender<bool>,
}

impl AddBookForm {
    /// Create a form with the default banner duration
    pub fn new(endpoint: Arc<dyn BookEndpoint>) -> Self {
        Self::with_feedback(endpoint, FeedbackPresenter::default())
    }

    pub fn with_config(endpoint: Arc<dyn BookEndpoint>, config: &AddBookConfig) -> Self {
        Self::with_feedback(endpoint, FeedbackPresenter::new(config.banner_duration))
    }

    fn with_feedback(endpoint: Arc<dyn BookEndpoint>, feedback: FeedbackPresenter) -> Self {
        let (closed, _) = watch::channel(false);
        Self {
            state: Mutex::new(FormState::new()),
            feedback,
            endpoint,
            closed,
        }
    }

    fn state(&self) -> MutexGuard<'_, FormState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn set_field_value(&self, field: Field, value: impl Into<String>) {
        self.state().set_field_value(field, value);
    }

    pub fn set_field_touched(&self, field: Field) {
        self.state().set_field_touched(field);
    }

    pub fn field(&self, field: Field) -> FieldState {
        self.state().field(field).clone()
    }

    pub fn value(&self, field: Field) -> String {
        self.state().value(field).to_string()
    }

    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        self.state().visible_error(field).cloned()
    }

    /// Errors currently shown next to their inputs
    pub fn visible_errors(&self) -> FieldErrors {
        let state = self.state();
        let mut errors = FieldErrors::new();
        for field in Field::ALL {
            errors.set(field, state.visible_error(field).cloned());
        }
        errors
    }

    pub fn draft(&self) -> BookDraft {
        self.state().draft()
    }

    pub fn is_valid(&self) -> bool {
        self.state().is_valid()
    }

    pub fn is_pending(&self) -> bool {
        self.state().is_pending()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        !self.is_closed() && self.state().can_submit()
    }

    pub fn reset_fields(&self) {
        self.state().reset_fields();
    }

    pub fn banner(&self) -> Banner {
        self.feedback.banner()
    }

    pub fn subscribe_banner(&self) -> watch::Receiver<Banner> {
        self.feedback.subscribe()
    }

    /// Route a UI event; only `Submit` produces an outcome
    pub async fn handle(&self, event: FormEvent) -> Option<Result<SubmissionResult>> {
        match event {
            FormEvent::Input { field, value } => {
                self.set_field_value(field, value);
                None
            }
            FormEvent::Blur(field) => {
                self.set_field_touched(field);
                None
            }
            FormEvent::Submit => Some(self.submit().await),
        }
    }

    /// Validate and send the record
    ///
    /// A rejected record is still `Ok`: the envelope says `success: false` and
    /// the error banner is up. `Err` means nothing reached a verdict.
    pub async fn submit(&self) -> Result<SubmissionResult> {
        if self.is_closed() {
            return Err(SubmitError::Closed);
        }

        let book = match self.state().begin_submit() {
            Ok(book) => book,
            Err(err) => {
                tracing::debug!("Submit blocked: {}", err);
                return Err(err);
            }
        };

        tracing::debug!(title = %book.title, status = %book.status, "Submitting book");

        let mut closed = self.closed.subscribe();
        let outcome = tokio::select! {
            outcome = self.endpoint.add_book(&book) => outcome,
            _ = wait_closed(&mut closed) => {
                self.state().finish_submit();
                tracing::debug!("Form closed with a submission in flight");
                return Err(SubmitError::Closed);
            }
        };

        match outcome {
            Ok(result) if result.success => {
                {
                    let mut state = self.state();
                    state.finish_submit();
                    state.reset_fields();
                }
                tracing::info!(title = %book.title, "Book accepted: {}", result.message);
                self.present(BannerKind::Success, result.message.clone());
                Ok(result)
            }
            Ok(result) => {
                self.state().finish_submit();
                tracing::warn!(title = %book.title, "Book rejected: {}", result.message);
                self.present(BannerKind::Error, result.message.clone());
                Ok(result)
            }
            Err(err) => {
                self.state().finish_submit();
                tracing::error!("Failed to submit book: {}", err);
                self.present(BannerKind::TransportError, err.to_string());
                Err(err.into())
            }
        }
    }

    /// Show a banner unless the form was torn down meanwhile
    fn present(&self, kind: BannerKind, message: String) {
        if self.is_closed() {
            tracing::debug!("Form closed, dropping {} banner", kind);
            return;
        }
        self.feedback.show(kind, message);
    }

    /// Tear the form down: abort any in-flight request and the banner timer
    pub fn close(&self) {
        self.closed.send_replace(true);
        self.feedback.cancel_timer();
    }

    pub fn is_closed(&self) -> bool {
        *self.closed.borrow()
    }
}

impl Drop for AddBookForm {
    fn drop(&mut self) {
        self.close();
    }
}

async fn wait_closed(closed: &mut watch::Receiver<bool>) {
    // The sender lives as long as the form, so an error cannot happen here
    let _ = closed.wait_for(|closed| *closed).await;
}
