//! Profile and exam-stats fetch operations.
//!
//! Every fetch emits, in order:
//! 1. a loading notification,
//! 2. a dismissal of all notifications (always, even if the request future
//!    is dropped before it resolves),
//! 3. exactly one success or error notification.
//!
//! Errors stop here: they are logged and reported to the user, and the
//! caller receives the `Result` only to decide which state slice to update.

use std::future::Future;

use crate::api::{DashboardApi, EXAM_STATS_PATH, PROFILE_PATH};
use crate::error::FetchError;
use crate::models::{ExamStats, University};
use crate::traits::Notifier;

/// The two dashboard data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fetcher {
    Profile,
    Stats,
}

impl Fetcher {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Fetcher::Profile => PROFILE_PATH,
            Fetcher::Stats => EXAM_STATS_PATH,
        }
    }

    pub fn loading_message(&self) -> &'static str {
        match self {
            Fetcher::Profile => "Loading university data...",
            Fetcher::Stats => "Loading exam stats...",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Fetcher::Profile => "University data loaded!",
            Fetcher::Stats => "Exam stats loaded!",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Fetcher::Profile => "Failed to load university data",
            Fetcher::Stats => "Failed to load exam stats",
        }
    }
}

/// Dismisses all notifications when dropped.
struct DismissOnDrop<'a>(&'a dyn Notifier);

impl Drop for DismissOnDrop<'_> {
    fn drop(&mut self) {
        self.0.dismiss_all();
    }
}

/// Wrap a request with the notification sequence of `fetcher`.
pub async fn run_fetch<T, F>(
    fetcher: Fetcher,
    notifier: &dyn Notifier,
    request: F,
) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    notifier.notify_loading(fetcher.loading_message());

    let guard = DismissOnDrop(notifier);
    let result = request.await;
    drop(guard);

    match &result {
        Ok(_) => {
            tracing::info!(endpoint = fetcher.endpoint(), "fetch succeeded");
            notifier.notify_success(fetcher.success_message());
        }
        Err(e) => {
            tracing::error!(endpoint = fetcher.endpoint(), error = %e, "fetch failed");
            notifier.notify_error(fetcher.error_message());
        }
    }

    result
}

/// Fetch the university profile.
pub async fn fetch_profile(
    api: &DashboardApi,
    notifier: &dyn Notifier,
) -> Result<University, FetchError> {
    run_fetch(Fetcher::Profile, notifier, api.fetch_profile()).await
}

/// Fetch the aggregate exam statistics.
pub async fn fetch_exam_stats(
    api: &DashboardApi,
    notifier: &dyn Notifier,
) -> Result<ExamStats, FetchError> {
    run_fetch(Fetcher::Stats, notifier, api.fetch_exam_stats()).await
}
