//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::{ExamStats, University};
use crate::notifications::NotificationEvent;

/// Messages sent from background tasks to the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A notification change requested by a fetch of the given mount
    Notification {
        mount: u64,
        event: NotificationEvent,
    },
    /// Profile fetch finished for the given dashboard mount
    ProfileFetched {
        mount: u64,
        result: Result<University, FetchError>,
    },
    /// Exam stats fetch finished for the given dashboard mount
    StatsFetched {
        mount: u64,
        result: Result<ExamStats, FetchError>,
    },
}
