//! Dashboard screen and placeholder screens for the other routes.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::cards::{render_profile_card, render_quick_actions, render_stat_cards};
use super::chart::render_chart;
use super::helpers::centered_rect;
use super::layout::DashboardLayout;
use super::sidebar::render_sidebar;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;
use crate::state::ChartData;

pub fn render_dashboard(frame: &mut Frame, app: &App) {
    let layout = DashboardLayout::compute(
        frame.area(),
        app.is_narrow(),
        app.dashboard.sidebar_open(),
    );

    render_header(frame, layout.header, app);
    render_profile_card(frame, layout.profile, app.dashboard.profile_view());
    render_stat_cards(frame, layout.stats, app.dashboard.exam_stats());
    render_chart(
        frame,
        layout.chart,
        &ChartData::from_stats(app.dashboard.exam_stats()),
    );
    render_quick_actions(frame, layout.actions);

    // Drawn last so the overlay variant sits above the content
    if let Some(sidebar) = layout.sidebar {
        render_sidebar(frame, sidebar, app, layout.sidebar_overlay);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " University Dashboard",
        Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
    )];
    if app.is_narrow() && !app.dashboard.sidebar_open() {
        spans.push(Span::styled("  [m] menu", Style::default().fg(COLOR_DIM)));
    }
    spans.push(Span::styled(
        "  [L] logout  [q] quit",
        Style::default().fg(COLOR_DIM),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Screens that exist as destinations but have no content here.
pub fn render_placeholder(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.route.title()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            app.route.path(),
            Style::default().fg(COLOR_HEADER),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "[Esc] Back to dashboard  [L] Logout  [q] Quit",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let text_area = centered_rect(50, 3, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );
}
