//! Toast overlay in the top-right corner.

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::helpers::{truncate_to_width, SPINNER_FRAMES};
use super::theme::{
    COLOR_DIALOG_BG, COLOR_TOAST_ERROR, COLOR_TOAST_INFO, COLOR_TOAST_LOADING,
    COLOR_TOAST_SUCCESS,
};
use crate::notifications::{Toast, ToastKind, ToastQueue};

const TOAST_WIDTH: u16 = 36;
const TOAST_HEIGHT: u16 = 3;

fn icon_and_color(toast: &Toast, now: Instant) -> (&'static str, Color) {
    match toast.kind {
        ToastKind::Loading => {
            let frame = (now.saturating_duration_since(toast.created_at).as_millis() / 100)
                as usize
                % SPINNER_FRAMES.len();
            (SPINNER_FRAMES[frame], COLOR_TOAST_LOADING)
        }
        ToastKind::Info => ("i", COLOR_TOAST_INFO),
        ToastKind::Success => ("✓", COLOR_TOAST_SUCCESS),
        ToastKind::Error => ("✗", COLOR_TOAST_ERROR),
    }
}

/// Stack toasts downward from the top-right corner, newest at the bottom.
pub fn render_toasts(frame: &mut Frame, toasts: &ToastQueue) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width - width;
    let now = Instant::now();

    for (i, toast) in toasts.iter().enumerate() {
        let y = area.y + i as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, TOAST_HEIGHT);
        let (icon, color) = icon_and_color(toast, now);
        let text_width = width.saturating_sub(6) as usize;

        let line = Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(color)),
            Span::raw(truncate_to_width(&toast.message, text_width)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color))
            .style(Style::default().bg(COLOR_DIALOG_BG));

        frame.render_widget(Clear, rect);
        frame.render_widget(Paragraph::new(line).block(block), rect);
    }
}
