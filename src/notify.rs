//! Notification Service - queued, auto-dismissing toasts.
//!
//! One toast is visible at a time; later toasts wait in a queue. A visible
//! toast is dismissed by the user or when its display interval (3000 ms by
//! default) has elapsed, and the next queued toast takes its place.
//!
//! Listeners registered with `on` receive the toast as a JSON string on the
//! `toast.shown` and `toast.dismissed` events.
//!
//! ## Example
//!
//! ```ignore
//! use storefront::notify::{Notifier, Severity, TOAST_SHOWN};
//!
//! let mut notifier = Notifier::new();
//! notifier.on(TOAST_SHOWN, |json| println!("{json}"));
//! notifier.notify("Item added to cart", Severity::Success);
//! notifier.tick(Instant::now());
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use event_emitter_rs::EventEmitter;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Event fired when a toast becomes visible.
pub const TOAST_SHOWN: &str = "toast.shown";
/// Event fired when a visible toast is dismissed or expires.
pub const TOAST_DISMISSED: &str = "toast.dismissed";

pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3000);

/// Number of raised toasts kept in `history`; older ones are dropped.
pub const HISTORY_LIMIT: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

struct Visible {
    toast: Toast,
    expires_at: Instant,
}

/// Toast queue with a single visible slot.
pub struct Notifier {
    auto_close: Duration,
    next_id: u64,
    visible: Option<Visible>,
    queue: VecDeque<Toast>,
    history: VecDeque<Toast>,
    emitter: EventEmitter,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self::with_auto_close(DEFAULT_AUTO_CLOSE)
    }

    pub fn with_auto_close(auto_close: Duration) -> Self {
        Self {
            auto_close,
            next_id: 1,
            visible: None,
            queue: VecDeque::new(),
            history: VecDeque::new(),
            emitter: EventEmitter::new(),
        }
    }

    pub fn auto_close(&self) -> Duration {
        self.auto_close
    }

    /// Register a listener for `TOAST_SHOWN` or `TOAST_DISMISSED`. Listeners
    /// run on emitter threads and receive the toast as JSON.
    pub fn on<F>(&mut self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event, listener);
    }

    /// Queue a toast, showing it at once if nothing else is visible.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.notify_at(message, severity, Instant::now())
    }

    /// `notify` with an explicit clock reading.
    pub fn notify_at(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let toast = Toast {
            id: self.next_id,
            message: message.into(),
            severity,
        };
        self.next_id += 1;

        debug!(id = toast.id, %severity, "toast queued");

        let id = toast.id;
        if self.history.len() == HISTORY_LIMIT {
            self.history.pop_front();
        }
        self.history.push_back(toast.clone());
        self.queue.push_back(toast);
        if self.visible.is_none() {
            self.show_next(now);
        }
        id
    }

    /// Expire the visible toast if its interval has elapsed by `now`, and
    /// promote the next queued one.
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .visible
            .as_ref()
            .is_some_and(|visible| visible.expires_at <= now);
        if expired {
            self.hide();
            self.show_next(now);
        }
    }

    /// Dismiss a toast by id, whether visible or still queued. Returns false
    /// for unknown or already dismissed ids.
    pub fn dismiss(&mut self, id: u64) -> bool {
        self.dismiss_at(id, Instant::now())
    }

    pub fn dismiss_at(&mut self, id: u64, now: Instant) -> bool {
        if self.visible.as_ref().is_some_and(|v| v.toast.id == id) {
            self.hide();
            self.show_next(now);
            return true;
        }
        let before = self.queue.len();
        self.queue.retain(|toast| toast.id != id);
        self.queue.len() != before
    }

    pub fn visible(&self) -> Option<&Toast> {
        self.visible.as_ref().map(|v| &v.toast)
    }

    /// Toasts waiting behind the visible one.
    pub fn pending(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// The last `HISTORY_LIMIT` toasts raised, oldest first.
    pub fn history(&self) -> &VecDeque<Toast> {
        &self.history
    }

    fn hide(&mut self) {
        if let Some(visible) = self.visible.take() {
            self.emit(TOAST_DISMISSED, &visible.toast);
        }
    }

    fn show_next(&mut self, now: Instant) {
        if let Some(toast) = self.queue.pop_front() {
            self.emit(TOAST_SHOWN, &toast);
            self.visible = Some(Visible {
                toast,
                expires_at: now + self.auto_close,
            });
        }
    }

    fn emit(&mut self, event: &str, toast: &Toast) {
        match serde_json::to_string(toast) {
            Ok(json) => {
                self.emitter.emit(event, json);
            }
            Err(e) => warn!(error = %e, "failed to encode toast"),
        }
    }
}
