//! Profile card, stat cards and quick action buttons.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_TOAST_ERROR};
use crate::app::QuickAction;
use crate::models::ExamStats;
use crate::state::{ChartData, ProfileView};

pub const PROFILE_LOADING_TEXT: &str = "Loading university details...";
pub const PROFILE_FAILED_TEXT: &str = "University details unavailable";

fn card_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(Span::styled(format!(" {} ", title), Style::default().fg(color)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
}

/// Profile card: name, email and logo reference, or a placeholder.
pub fn render_profile_card(frame: &mut Frame, area: Rect, profile: ProfileView<'_>) {
    let block = card_block("University", COLOR_ACCENT);
    let text_width = area.width.saturating_sub(4) as usize;

    let lines = match profile {
        ProfileView::Loaded(university) => vec![
            Line::from(Span::styled(
                truncate_to_width(&university.name, text_width),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_to_width(&university.email, text_width),
                Style::default().fg(COLOR_HEADER),
            )),
            Line::from(Span::styled(
                truncate_to_width(&format!("Logo: {}", university.logo_url()), text_width),
                Style::default().fg(COLOR_DIM),
            )),
        ],
        ProfileView::NotLoaded => vec![Line::from(Span::styled(
            PROFILE_LOADING_TEXT,
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))],
        ProfileView::Failed => vec![Line::from(Span::styled(
            PROFILE_FAILED_TEXT,
            Style::default().fg(COLOR_TOAST_ERROR),
        ))],
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One card per statistic, side by side, in chart order and colors.
pub fn render_stat_cards(frame: &mut Frame, area: Rect, stats: &ExamStats) {
    let chart = ChartData::from_stats(stats);
    let constraints = vec![Constraint::Ratio(1, chart.bars.len() as u32); chart.bars.len()];
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (bar, col) in chart.bars.iter().zip(cols.iter()) {
        let value = Paragraph::new(Line::from(Span::styled(
            bar.display_value(),
            Style::default().fg(bar.color()).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(card_block(bar.label(), bar.color()));
        frame.render_widget(value, *col);
    }
}

/// Quick action buttons with their key bindings.
pub fn render_quick_actions(frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (i, action) in QuickAction::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(
            format!("[{}]", action.key()),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", action.route().title()),
            Style::default().fg(COLOR_HEADER),
        ));
    }

    let block = card_block("Quick Actions", COLOR_ACCENT);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
