//! Chart input derived from exam statistics.

use ratatui::style::Color;

use crate::models::ExamStats;
use crate::ui::theme::{COLOR_STUDENTS_ASSIGNED, COLOR_STUDENTS_ATTENDED, COLOR_TOTAL_EXAMS};

pub const CHART_TITLE: &str = "Exam Statistics";
pub const CHART_AXIS_LABEL: &str = "Count";

/// The fixed chart categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatCategory {
    TotalExams,
    StudentsAssigned,
    StudentsAttended,
}

impl StatCategory {
    pub const ALL: [StatCategory; 3] = [
        StatCategory::TotalExams,
        StatCategory::StudentsAssigned,
        StatCategory::StudentsAttended,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::TotalExams => "Total Exams",
            StatCategory::StudentsAssigned => "Students Assigned",
            StatCategory::StudentsAttended => "Students Attended",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            StatCategory::TotalExams => COLOR_TOTAL_EXAMS,
            StatCategory::StudentsAssigned => COLOR_STUDENTS_ASSIGNED,
            StatCategory::StudentsAttended => COLOR_STUDENTS_ATTENDED,
        }
    }

    pub fn value(&self, stats: &ExamStats) -> Option<u64> {
        match self {
            StatCategory::TotalExams => stats.total_exams,
            StatCategory::StudentsAssigned => stats.students_assigned,
            StatCategory::StudentsAttended => stats.students_attended,
        }
    }
}

/// One bar of the chart. `value` is `None` when the server omitted it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartBar {
    pub category: StatCategory,
    pub value: Option<u64>,
}

impl ChartBar {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn color(&self) -> Color {
        self.category.color()
    }

    /// Text shown for the value; a dash when absent.
    pub fn display_value(&self) -> String {
        self.value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "—".to_string())
    }
}

/// Bar chart input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData {
    pub title: &'static str,
    pub axis_label: &'static str,
    pub bars: Vec<ChartBar>,
}

impl ChartData {
    /// Derive the chart from the current stats. Pure and deterministic.
    pub fn from_stats(stats: &ExamStats) -> Self {
        Self {
            title: CHART_TITLE,
            axis_label: CHART_AXIS_LABEL,
            bars: StatCategory::ALL
                .iter()
                .map(|category| ChartBar {
                    category: *category,
                    value: category.value(stats),
                })
                .collect(),
        }
    }

    pub fn values(&self) -> Vec<Option<u64>> {
        self.bars.iter().map(|bar| bar.value).collect()
    }

    /// Largest present value, used to scale the bars.
    pub fn max_value(&self) -> u64 {
        self.bars.iter().filter_map(|bar| bar.value).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_follow_category_order() {
        let chart = ChartData::from_stats(&ExamStats::new(5, 40, 38));
        assert_eq!(chart.values(), vec![Some(5), Some(40), Some(38)]);
        assert_eq!(
            chart.bars.iter().map(|b| b.label()).collect::<Vec<_>>(),
            vec!["Total Exams", "Students Assigned", "Students Attended"]
        );
        assert_eq!(chart.title, "Exam Statistics");
        assert_eq!(chart.axis_label, "Count");
        assert_eq!(chart.max_value(), 40);
    }

    #[test]
    fn test_missing_value_is_absent() {
        let stats = ExamStats {
            total_exams: Some(5),
            students_assigned: None,
            students_attended: Some(38),
        };
        let chart = ChartData::from_stats(&stats);
        assert_eq!(chart.values(), vec![Some(5), None, Some(38)]);
        assert_eq!(chart.bars[1].display_value(), "—");
    }

    #[test]
    fn test_colors_are_distinct() {
        let chart = ChartData::from_stats(&ExamStats::default());
        assert_ne!(chart.bars[0].color(), chart.bars[1].color());
        assert_ne!(chart.bars[1].color(), chart.bars[2].color());
        assert_ne!(chart.bars[0].color(), chart.bars[2].color());
    }

    #[test]
    fn test_default_stats_chart_is_zero() {
        let chart = ChartData::from_stats(&ExamStats::default());
        assert_eq!(chart.values(), vec![Some(0), Some(0), Some(0)]);
        assert_eq!(chart.max_value(), 0);
    }
}
