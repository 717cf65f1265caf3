//! UI components module.
//!
//! Contains ratatui widgets for displaying the company directory.

pub mod filters;
pub mod pagination;
pub mod search;
pub mod table;

pub use filters::render_filters;
pub use pagination::render_pagination;
pub use search::render_search;
pub use table::render_table;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Areas {
    pub title: Rect,
    pub search: Rect,
    pub filters: Rect,
    pub table: Rect,
    pub pagination: Rect,
    pub status: Rect,
}

/// Split the frame into the directory layout.
pub fn layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Search bar
            Constraint::Length(4), // Filters
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Pagination
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Areas {
        title: chunks[0],
        search: chunks[1],
        filters: chunks[2],
        table: chunks[3],
        pagination: chunks[4],
        status: chunks[5],
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
