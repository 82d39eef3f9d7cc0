//! Dashboard state containers.
//!
//! - [`DashboardState`]: fetched data, per-fetch status and the sidebar toggle
//! - [`ChartData`]: bar chart input derived from [`crate::models::ExamStats`]

pub mod chart;
pub mod dashboard;

pub use chart::{ChartBar, ChartData, StatCategory, CHART_AXIS_LABEL, CHART_TITLE};
pub use dashboard::{DashboardState, FetchStatus, ProfileView};
