//! Status notification capability.
//!
//! Fetch operations report progress through a [`Notifier`] rather than
//! touching the toast queue directly, so they can run on background tasks
//! and be tested with a recording double.

/// Transient user-facing status messages.
pub trait Notifier: Send + Sync {
    /// Show a loading notification that stays until dismissed.
    fn notify_loading(&self, message: &str);

    /// Show a success notification.
    fn notify_success(&self, message: &str);

    /// Show an error notification.
    fn notify_error(&self, message: &str);

    /// Dismiss every active notification.
    fn dismiss_all(&self);
}
