//! Feedback presenter: one transient banner that hides itself after a delay

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How long a banner stays up by default
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(3000);

/// Banner variants other than hidden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BannerKind {
    /// The endpoint rejected the record
    Error,
    /// The endpoint accepted the record
    Success,
    /// The endpoint could not be reached or answered garbage
    TransportError,
}

impl fmt::Display for BannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BannerKind::Error => "error",
            BannerKind::Success => "success",
            BannerKind::TransportError => "transport-error",
        })
    }
}

/// The single banner region; at most one message is ever shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Banner {
    #[default]
    Hidden,
    Error(String),
    Success(String),
    TransportError(String),
}

impl Banner {
    pub fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        let message = message.into();
        match kind {
            BannerKind::Error => Banner::Error(message),
            BannerKind::Success => Banner::Success(message),
            BannerKind::TransportError => Banner::TransportError(message),
        }
    }

    pub fn kind(&self) -> Option<BannerKind> {
        match self {
            Banner::Hidden => None,
            Banner::Error(_) => Some(BannerKind::Error),
            Banner::Success(_) => Some(BannerKind::Success),
            Banner::TransportError(_) => Some(BannerKind::TransportError),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Banner::Hidden => None,
            Banner::Error(message) | Banner::Success(message) | Banner::TransportError(message) => {
                Some(message)
            }
        }
    }

    pub fn is_visible(&self) -> bool {
        !matches!(self, Banner::Hidden)
    }
}

/// Shows banners and schedules their removal
///
/// Every `show` bumps a generation counter; the hide timer only clears the
/// banner it was scheduled for, so a stale timer can never hide a newer one.
pub struct FeedbackPresenter {
    banner: Arc<watch::Sender<Banner>>,
    generation: Arc<AtomicU64>,
    timer: Mutex<Option<JoinHandle<()>>>,
    display_for: Duration,
}

impl FeedbackPresenter {
    pub fn new(display_for: Duration) -> Self {
        let (banner, _) = watch::channel(Banner::Hidden);
        Self {
            banner: Arc::new(banner),
            generation: Arc::new(AtomicU64::new(0)),
            timer: Mutex::new(None),
            display_for,
        }
    }

    /// Current banner
    pub fn banner(&self) -> Banner {
        self.banner.borrow().clone()
    }

    /// Watch banner transitions
    pub fn subscribe(&self) -> watch::Receiver<Banner> {
        self.banner.subscribe()
    }

    /// Display a banner and (re)start the hide timer
    pub fn show(&self, kind: BannerKind, message: impl Into<String>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let deadline = Instant::now() + self.display_for;
        self.banner.send_replace(Banner::new(kind, message));

        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(_) => {
                tracing::warn!("No async runtime, {} banner will not auto-hide", kind);
                return;
            }
        };

        let banner = Arc::clone(&self.banner);
        let current = Arc::clone(&self.generation);
        let handle = runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            banner.send_if_modified(|state| {
                if current.load(Ordering::SeqCst) == generation && state.is_visible() {
                    *state = Banner::Hidden;
                    true
                } else {
                    false
                }
            });
        });

        if let Some(previous) = self.timer_slot().replace(handle) {
            previous.abort();
        }
    }

    /// Hide immediately and cancel the pending timer
    pub fn dismiss(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.cancel_timer();
        self.banner.send_if_modified(|state| {
            let was_visible = state.is_visible();
            *state = Banner::Hidden;
            was_visible
        });
    }

    /// Abort the hide timer, leaving the banner as it is
    pub fn cancel_timer(&self) {
        if let Some(timer) = self.timer_slot().take() {
            timer.abort();
        }
    }

    fn timer_slot(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.timer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FeedbackPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER_DURATION)
    }
}

impl Drop for FeedbackPresenter {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_hidden_after_exactly_three_seconds() {
        let presenter = FeedbackPresenter::default();
        let start = Instant::now();
        presenter.show(BannerKind::Success, "Book added");
        let mut rx = presenter.subscribe();

        tokio::time::advance(Duration::from_millis(2999)).await;
        tokio::task::yield_now().await;
        assert_eq!(presenter.banner(), Banner::Success("Book added".to_string()));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Banner::Hidden);
        assert_eq!(start.elapsed().as_millis(), 3000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_show_restarts_window() {
        let presenter = FeedbackPresenter::default();
        presenter.show(BannerKind::Error, "Duplicate title");

        tokio::time::advance(Duration::from_millis(2000)).await;
        let restart = Instant::now();
        presenter.show(BannerKind::Success, "Book added");
        let mut rx = presenter.subscribe();

        // The first timer would have fired here
        tokio::time::advance(Duration::from_millis(1500)).await;
        tokio::task::yield_now().await;
        assert_eq!(presenter.banner(), Banner::Success("Book added".to_string()));

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Banner::Hidden);
        assert_eq!(restart.elapsed().as_millis(), 3000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_one_banner_at_a_time() {
        let presenter = FeedbackPresenter::default();
        presenter.show(BannerKind::Error, "Duplicate title");
        presenter.show(BannerKind::Success, "Book added");

        let banner = presenter.banner();
        assert_eq!(banner.kind(), Some(BannerKind::Success));
        assert_eq!(banner.message(), Some("Book added"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_and_cancel() {
        let presenter = FeedbackPresenter::default();
        presenter.show(BannerKind::TransportError, "connection refused");
        presenter.dismiss();
        assert_eq!(presenter.banner(), Banner::Hidden);

        presenter.show(BannerKind::Error, "Duplicate title");
        presenter.cancel_timer();
        tokio::time::sleep(Duration::from_millis(5000)).await;
        // No timer left to hide it
        assert!(presenter.banner().is_visible());
    }

    #[test]
    fn test_show_without_runtime_stays_visible() {
        let presenter = FeedbackPresenter::new(Duration::from_millis(10));
        presenter.show(BannerKind::Success, "Book added");
        assert_eq!(presenter.banner().message(), Some("Book added"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(BannerKind::TransportError.to_string(), "transport-error");
        assert_eq!(Banner::Hidden.kind(), None);
        assert!(!Banner::Hidden.is_visible());
    }
}
