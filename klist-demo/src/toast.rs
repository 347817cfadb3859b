use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long a toast stays on the status line.
pub const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    shown_at: Instant,
}

/// Transient status message shared between click handlers and the UI loop.
///
/// Handlers run inside `dispatch_click` and only get a shared reference to
/// their captures, so the slot sits behind a mutex.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    current: Arc<Mutex<Option<Toast>>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever toast is showing.
    pub fn show(&self, message: impl Into<String>) {
        self.show_at(message, Instant::now());
    }

    pub(crate) fn show_at(&self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        log::info!("toast: {message}");
        if let Ok(mut current) = self.current.lock() {
            *current = Some(Toast {
                message,
                shown_at: now,
            });
        }
    }

    /// The message to show right now, if any.
    pub fn current(&self) -> Option<String> {
        self.current_at(Instant::now())
    }

    pub(crate) fn current_at(&self, now: Instant) -> Option<String> {
        let mut current = self.current.lock().ok()?;
        let expired = current
            .as_ref()
            .is_some_and(|toast| now.duration_since(toast.shown_at) >= TOAST_DURATION);
        if expired {
            *current = None;
        }
        current.as_ref().map(|toast| toast.message.clone())
    }
}
