//! UI rendering for the university dashboard
//!
//! - Dashboard: navigation panel, profile card, stat cards, exam chart and
//!   quick actions
//! - Login: token entry
//! - Other routes: a placeholder naming the route
//!
//! Toasts are drawn over whichever screen is active.
//!
//! ## Responsive Layout
//!
//! Below the configured breakpoint width the navigation panel is hidden and
//! can be toggled open as an overlay. Bar widths follow the chart width.

mod cards;
mod chart;
mod helpers;
mod layout;
mod login;
mod screens;
mod sidebar;
pub mod theme;
mod toasts;

pub use cards::{PROFILE_FAILED_TEXT, PROFILE_LOADING_TEXT};
pub use chart::build_bars;
pub use helpers::truncate_to_width;
pub use layout::{bar_width, DashboardLayout, SIDEBAR_WIDTH};
pub use login::LOGIN_PROMPT;

use ratatui::Frame;

use crate::app::{App, Route};
use login::render_login_screen;
use screens::{render_dashboard, render_placeholder};
use toasts::render_toasts;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI for the current route
pub fn render(frame: &mut Frame, app: &App) {
    match app.route {
        Route::Dashboard => render_dashboard(frame, app),
        Route::Login => render_login_screen(frame, app),
        _ => render_placeholder(frame, app),
    }

    render_toasts(frame, &app.toasts);
}
