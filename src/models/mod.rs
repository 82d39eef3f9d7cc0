//! Data models returned by the university API.

pub mod stats;
pub mod university;

pub use stats::ExamStats;
pub use university::{Logo, University, PLACEHOLDER_LOGO};
