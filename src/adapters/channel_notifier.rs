//! Notifier that forwards events to the event loop.

use tokio::sync::mpsc::UnboundedSender;

use crate::app::AppMessage;
use crate::notifications::NotificationEvent;
use crate::traits::Notifier;

/// [`Notifier`] used by background fetch tasks.
///
/// Events travel on the same channel as fetch results, so the event loop
/// sees them in the order they were emitted. Each event carries the mount
/// that started the fetch.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<AppMessage>,
    mount: u64,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<AppMessage>, mount: u64) -> Self {
        Self { tx, mount }
    }

    fn send(&self, event: NotificationEvent) {
        let msg = AppMessage::Notification {
            mount: self.mount,
            event,
        };
        if self.tx.send(msg).is_err() {
            tracing::debug!("Notification dropped: event loop has shut down");
        }
    }
}

impl Notifier for ChannelNotifier {
    fn notify_loading(&self, message: &str) {
        self.send(NotificationEvent::loading(message));
    }

    fn notify_success(&self, message: &str) {
        self.send(NotificationEvent::success(message));
    }

    fn notify_error(&self, message: &str) {
        self.send(NotificationEvent::error(message));
    }

    fn dismiss_all(&self) {
        self.send(NotificationEvent::DismissAll);
    }
}
