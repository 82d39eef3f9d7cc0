//! Exam statistics bar chart.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, BorderType, Borders},
};

use super::layout::bar_width;
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::state::ChartData;

/// Build the bars for `chart`. An absent value is drawn empty with a dash.
pub fn build_bars(chart: &ChartData) -> Vec<Bar<'static>> {
    chart
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.value.unwrap_or(0))
                .text_value(bar.display_value())
                .label(Line::from(bar.label()))
                .style(Style::default().fg(bar.color()))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(bar.color())
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect()
}

pub fn render_chart(frame: &mut Frame, area: Rect, chart: &ChartData) {
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", chart.title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            format!(" {} ", chart.axis_label),
            Style::default().fg(COLOR_DIM),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));

    let inner_width = block.inner(area).width;
    let bars = build_bars(chart);
    let width = bar_width(inner_width, bars.len() as u16);

    let widget = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .max(chart.max_value().max(1));

    frame.render_widget(widget, area);
}
