//! Color theme constants for the dashboard UI
//!
//! Defines the dark color palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Base Theme
// ============================================================================

/// Panel border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the active navigation entry
pub const COLOR_ACCENT: Color = Color::Rgb(99, 102, 241); // indigo #6366F1

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background of the selected navigation entry
pub const COLOR_SELECTED_BG: Color = Color::Rgb(30, 32, 60);

// ============================================================================
// Chart Category Colors
// ============================================================================

/// Total Exams bar and card
pub const COLOR_TOTAL_EXAMS: Color = Color::Rgb(59, 130, 246); // blue #3B82F6

/// Students Assigned bar and card
pub const COLOR_STUDENTS_ASSIGNED: Color = Color::Rgb(16, 185, 129); // green #10B981

/// Students Attended bar and card
pub const COLOR_STUDENTS_ATTENDED: Color = Color::Rgb(245, 158, 11); // amber #F59E0B

// ============================================================================
// Toast Colors
// ============================================================================

pub const COLOR_TOAST_LOADING: Color = Color::Cyan;

pub const COLOR_TOAST_INFO: Color = Color::Gray;

pub const COLOR_TOAST_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

pub const COLOR_TOAST_ERROR: Color = Color::Red;

/// Background for toast and dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
