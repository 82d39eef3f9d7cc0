//! Dashboard view state.
//!
//! Rebuilt from scratch on every mount. The profile and stats slices are
//! written only by their own fetch results, and each fetch has its own
//! status, so one finishing never hides the other still being in flight.

use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::models::{ExamStats, University};

// ============================================================================
// FetchStatus
// ============================================================================

/// Lifecycle of one fetch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }
}

// ============================================================================
// ProfileView
// ============================================================================

/// What the profile card should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileView<'a> {
    /// Nothing received yet.
    NotLoaded,
    /// A profile is available (possibly from before a later failure).
    Loaded(&'a University),
    /// The fetch failed and nothing was ever received.
    Failed,
}

// ============================================================================
// DashboardState
// ============================================================================

/// State held by the dashboard for the lifetime of one mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    university: Option<University>,
    exam_stats: ExamStats,
    profile_status: FetchStatus,
    stats_status: FetchStatus,
    sidebar_open: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn university(&self) -> Option<&University> {
        self.university.as_ref()
    }

    pub fn exam_stats(&self) -> &ExamStats {
        &self.exam_stats
    }

    pub fn status(&self, fetcher: Fetcher) -> FetchStatus {
        match fetcher {
            Fetcher::Profile => self.profile_status,
            Fetcher::Stats => self.stats_status,
        }
    }

    /// True while either fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.profile_status.is_loading() || self.stats_status.is_loading()
    }

    pub fn profile_view(&self) -> ProfileView<'_> {
        match (&self.university, self.profile_status) {
            (Some(university), _) => ProfileView::Loaded(university),
            (None, FetchStatus::Failed) => ProfileView::Failed,
            (None, _) => ProfileView::NotLoaded,
        }
    }

    /// Mark a fetch as started.
    pub fn begin(&mut self, fetcher: Fetcher) {
        match fetcher {
            Fetcher::Profile => self.profile_status = FetchStatus::Loading,
            Fetcher::Stats => self.stats_status = FetchStatus::Loading,
        }
    }

    /// Apply a profile fetch result. Failure leaves the profile untouched.
    pub fn apply_profile(&mut self, result: Result<University, FetchError>) {
        match result {
            Ok(university) => {
                self.university = Some(university);
                self.profile_status = FetchStatus::Succeeded;
            }
            Err(_) => self.profile_status = FetchStatus::Failed,
        }
    }

    /// Apply a stats fetch result. Success replaces the stats wholesale;
    /// failure leaves them untouched.
    pub fn apply_stats(&mut self, result: Result<ExamStats, FetchError>) {
        match result {
            Ok(stats) => {
                self.exam_stats = stats;
                self.stats_status = FetchStatus::Succeeded;
            }
            Err(_) => self.stats_status = FetchStatus::Failed,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}
