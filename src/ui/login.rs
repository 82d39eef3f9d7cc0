use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::helpers::centered_rect;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::app::App;

pub const LOGIN_PROMPT: &str = "Paste your access token and press Enter";

pub fn render_login_screen(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let outer_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(COLOR_BORDER));
    frame.render_widget(outer_block, area);

    let dialog_area = centered_rect(56, 9, area.inner(Margin::new(2, 1)));
    let dialog_block = Block::default()
        .title(Span::styled(
            " Sign in ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT));

    // Only the token length is shown
    let masked = "•".repeat(app.login_input.chars().count().min(40));

    let lines = vec![
        Line::from(Span::styled(LOGIN_PROMPT, Style::default().fg(COLOR_HEADER))),
        Line::raw(""),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(COLOR_ACCENT)),
            Span::raw(masked),
            Span::styled("█", Style::default().fg(COLOR_DIM)),
        ]),
        Line::raw(""),
        Line::from(Span::styled(
            "[Enter] Sign in  [Esc] Clear / Quit",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let para = Paragraph::new(lines)
        .block(dialog_block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(para, dialog_area);
}
