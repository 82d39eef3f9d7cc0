//! Navigation panel.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState},
};

use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_SELECTED_BG};
use crate::app::{App, NavItem};

pub fn render_sidebar(frame: &mut Frame, area: Rect, app: &App, overlay: bool) {
    if overlay {
        frame.render_widget(Clear, area);
    }

    let items: Vec<ListItem> = NavItem::ALL
        .iter()
        .map(|item| {
            let active = matches!(item, NavItem::Go(route) if *route == app.route);
            let style = if active {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(COLOR_HEADER)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", item.icon()), style),
                Span::styled(item.label(), style),
            ]))
        })
        .collect();

    let hint = if app.is_narrow() { " [m] close " } else { "" };
    let block = Block::default()
        .title(Span::styled(
            " Exam Desk ",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(hint, Style::default().fg(COLOR_DIM)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(COLOR_SELECTED_BG))
        .highlight_symbol("▌");

    let mut state = ListState::default().with_selected(Some(app.sidebar_index));
    frame.render_stateful_widget(list, area, &mut state);
}
