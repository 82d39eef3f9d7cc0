//! Toast notifications shown over the dashboard.
//!
//! Background tasks describe what they want shown as [`NotificationEvent`]s;
//! the event loop applies them to the [`ToastQueue`], which owns ordering
//! and expiry.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default lifetime of non-loading toasts.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(4);

/// Maximum number of toasts kept on screen.
const MAX_TOASTS: usize = 5;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    /// Operation in progress; persists until dismissed.
    Loading,
    /// Neutral information.
    Info,
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
}

/// A single toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic identifier.
    pub id: u64,
    /// Severity classification.
    pub kind: ToastKind,
    /// Display message.
    pub message: String,
    /// When the toast was pushed.
    pub created_at: Instant,
}

/// A request to change the visible notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationEvent {
    /// Push a toast of the given kind.
    Show { kind: ToastKind, message: String },
    /// Remove every active toast.
    DismissAll,
}

impl NotificationEvent {
    pub fn loading(message: impl Into<String>) -> Self {
        Self::Show {
            kind: ToastKind::Loading,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Show {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Show {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Ordered set of active toasts, oldest first.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Apply a notification event.
    pub fn apply(&mut self, event: NotificationEvent) {
        match event {
            NotificationEvent::Show { kind, message } => {
                self.push(kind, message);
            }
            NotificationEvent::DismissAll => self.dismiss_all(),
        }
    }

    /// Push a toast and return its id. The oldest toast is dropped when full.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            id,
            kind,
            message: message.into(),
            created_at: Instant::now(),
        });
        id
    }

    pub fn dismiss_all(&mut self) {
        self.toasts.clear();
    }

    /// Drop expired toasts. Returns true if anything was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let ttl = self.ttl;
        let before = self.toasts.len();
        self.toasts.retain(|t| {
            t.kind == ToastKind::Loading || now.saturating_duration_since(t.created_at) < ttl
        });
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Count toasts of a given kind.
    pub fn count(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }
}
