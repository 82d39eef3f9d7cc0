//! Responsive layout for the dashboard.
//!
//! The dashboard is a navigation panel on the left and a content column on
//! the right. On narrow terminals the panel is hidden unless toggled open, in
//! which case it overlays the content instead of taking space from it.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

// ============================================================================
// Sizes
// ============================================================================

/// Width of the navigation panel in columns
pub const SIDEBAR_WIDTH: u16 = 24;

/// Height of the profile card row
pub const PROFILE_CARD_HEIGHT: u16 = 5;

/// Height of the stat card row
pub const STAT_CARD_HEIGHT: u16 = 4;

/// Height of the quick action row
pub const QUICK_ACTIONS_HEIGHT: u16 = 3;

/// Bars never get narrower or wider than this
const MIN_BAR_WIDTH: u16 = 3;
const MAX_BAR_WIDTH: u16 = 20;

// ============================================================================
// Dashboard Layout
// ============================================================================

/// Areas of the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    /// Navigation panel, if drawn
    pub sidebar: Option<Rect>,
    /// Whether the panel is drawn over the content
    pub sidebar_overlay: bool,
    pub header: Rect,
    pub profile: Rect,
    pub stats: Rect,
    pub chart: Rect,
    pub actions: Rect,
}

impl DashboardLayout {
    pub fn compute(area: Rect, narrow: bool, sidebar_open: bool) -> Self {
        let panel_width = SIDEBAR_WIDTH.min(area.width);

        let (sidebar, sidebar_overlay, content) = if !narrow {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(panel_width), Constraint::Min(0)])
                .split(area);
            (Some(cols[0]), false, cols[1])
        } else if sidebar_open {
            let panel = Rect::new(area.x, area.y, panel_width, area.height);
            (Some(panel), true, area)
        } else {
            (None, false, area)
        };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(PROFILE_CARD_HEIGHT),
                Constraint::Length(STAT_CARD_HEIGHT),
                Constraint::Min(6),
                Constraint::Length(QUICK_ACTIONS_HEIGHT),
            ])
            .split(content);

        Self {
            sidebar,
            sidebar_overlay,
            header: rows[0],
            profile: rows[1],
            stats: rows[2],
            chart: rows[3],
            actions: rows[4],
        }
    }
}

/// Bar width for `bars` bars in a chart `available` columns wide, leaving
/// one column of gap between bars.
pub fn bar_width(available: u16, bars: u16) -> u16 {
    if bars == 0 {
        return MIN_BAR_WIDTH;
    }
    let gaps = bars.saturating_sub(1);
    let per_bar = available.saturating_sub(gaps) / bars;
    per_bar.clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH)
}
