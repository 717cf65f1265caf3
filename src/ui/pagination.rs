//! Pagination bar rendering.
//!
//! Displays the Previous/Next buttons and the page indicator.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Which pagination button a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Previous,
    Next,
}

/// Render the pagination bar.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Disabled buttons are dimmed. The indicator reads "Page X of Y", with
/// Y = 0 when nothing matches.
pub fn render_pagination(app: &App, area: Rect, buf: &mut Buffer) {
    let page = app.view.page_view();

    let button = |label: &'static str, enabled: bool| {
        let style = if enabled {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };

    let line = Line::from(vec![
        button("[ Previous ]", page.has_previous),
        Span::raw("   "),
        Span::styled(
            format!("Page {} of {}", page.current_page, page.total_pages),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw("   "),
        button("[ Next ]", page.has_next),
    ]);

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    Widget::render(paragraph, area, buf);
}

/// Map a click column inside the pagination bar to a button.
///
/// The left third of the bar acts as "Previous", the right third as "Next".
pub fn button_at(area: Rect, column: u16, row: u16) -> Option<PageButton> {
    let inside = column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height;
    if !inside {
        return None;
    }

    let third = area.width / 3;
    let offset = column - area.x;
    if offset < third {
        Some(PageButton::Previous)
    } else if offset >= area.width - third {
        Some(PageButton::Next)
    } else {
        None
    }
}
