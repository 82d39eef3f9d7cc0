//! Recording notifier for testing.

use std::sync::{Arc, Mutex};

use crate::notifications::{NotificationEvent, ToastKind, ToastQueue};
use crate::traits::Notifier;

/// [`Notifier`] that records every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<NotificationEvent>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<NotificationEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Replay the recorded events into a fresh queue and return it, which
    /// gives the toasts a user would still see.
    pub fn visible(&self) -> ToastQueue {
        let mut queue = ToastQueue::default();
        for event in self.events() {
            queue.apply(event);
        }
        queue
    }

    /// Number of `Show` events of the given kind.
    pub fn shown(&self, kind: ToastKind) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, NotificationEvent::Show { kind: k, .. } if *k == kind))
            .count()
    }

    fn record(&self, event: NotificationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Notifier for RecordingNotifier {
    fn notify_loading(&self, message: &str) {
        self.record(NotificationEvent::loading(message));
    }

    fn notify_success(&self, message: &str) {
        self.record(NotificationEvent::success(message));
    }

    fn notify_error(&self, message: &str) {
        self.record(NotificationEvent::error(message));
    }

    fn dismiss_all(&self) {
        self.record(NotificationEvent::DismissAll);
    }
}
