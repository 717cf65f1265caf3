//! Filters widget rendering.
//!
//! Displays the Location and Industry selectors.

use crate::app::{App, UiMode};
use crate::directory::models::{industry_label, location_label};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the filters widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Shows the selected location and industry, with "All ..." for no filter.
/// Adds the key help line when filters mode is active.
pub fn render_filters(app: &App, area: Rect, buf: &mut Buffer) {
    let is_active = app.mode == UiMode::Filters;
    let location = app.view.location_filter.as_str();
    let industry = app.view.industry_filter.as_str();

    let selected = |value: &str| {
        Style::default().fg(if value.is_empty() {
            Color::Gray
        } else {
            Color::Green
        })
    };

    let mut lines = vec![Line::from(vec![
        Span::styled("Location: ", Style::default().fg(Color::Cyan)),
        Span::styled(format!("< {} >", location_label(location)), selected(location)),
        Span::raw("   "),
        Span::styled("Industry: ", Style::default().fg(Color::Cyan)),
        Span::styled(format!("< {} >", industry_label(industry)), selected(industry)),
    ])];

    if is_active {
        lines.push(Line::from(Span::styled(
            "Press 'l'/'L' for location, 'i'/'I' for industry, 'c' to clear, 'Esc' or 'f' to exit",
            Style::default().fg(Color::Yellow),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(if is_active {
                "Filters (ACTIVE - press 'Esc' or 'f' to exit)"
            } else {
                "Filters (press 'f')"
            })
            .borders(Borders::ALL)
            .style(if is_active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );

    Widget::render(paragraph, area, buf);
}
