//! Aggregate exam counters as returned by `GET /university/exam/stats`.

use serde::{Deserialize, Serialize};

/// Aggregate exam activity for the university.
///
/// Each counter is optional on the wire. A response that omits a field
/// yields `None` for it; nothing is carried over from earlier values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamStats {
    #[serde(default)]
    pub total_exams: Option<u64>,
    #[serde(default)]
    pub students_assigned: Option<u64>,
    #[serde(default)]
    pub students_attended: Option<u64>,
}

impl Default for ExamStats {
    /// All counters zero, the value shown before the first successful fetch.
    fn default() -> Self {
        Self {
            total_exams: Some(0),
            students_assigned: Some(0),
            students_attended: Some(0),
        }
    }
}

impl ExamStats {
    pub fn new(total_exams: u64, students_assigned: u64, students_attended: u64) -> Self {
        Self {
            total_exams: Some(total_exams),
            students_assigned: Some(students_assigned),
            students_attended: Some(students_attended),
        }
    }
}
