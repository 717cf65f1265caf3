//! Company table rendering.
//!
//! Displays the current page of companies, or a placeholder row when the
//! page is empty.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Text of the placeholder row.
pub const EMPTY_TEXT: &str = "No companies found";

/// Render the company table.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Columns are the row key, Name, Location and Industry. When the page has
/// no rows a single centered placeholder spans the full width below the header.
pub fn render_table(app: &App, area: Rect, buf: &mut Buffer) {
    let page = app.view.page_view();
    let title = format!(
        "Companies ({}/{})",
        page.filtered_count,
        app.view.companies.len()
    );

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);
    Widget::render(block, area, buf);

    let header = Row::new(vec!["#", "Name", "Location", "Industry"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = page
        .rows
        .iter()
        .map(|(key, company)| {
            Row::new(vec![
                Cell::from(key.as_str()).style(Style::default().fg(Color::DarkGray)),
                Cell::from(company.name()).style(Style::default().add_modifier(Modifier::BOLD)),
                Cell::from(company.location()),
                Cell::from(company.industry()),
            ])
        })
        .collect();
    let is_empty = rows.is_empty();

    let widths = [
        Constraint::Length(6),
        Constraint::Percentage(40),
        Constraint::Percentage(25),
        Constraint::Percentage(35),
    ];
    let table = Table::new(rows, widths).header(header).column_spacing(1);
    Widget::render(table, inner, buf);

    if is_empty && inner.height > 1 {
        let placeholder_area = Rect {
            y: inner.y + 1,
            height: 1,
            ..inner
        };
        let placeholder = Paragraph::new(EMPTY_TEXT)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            );
        Widget::render(placeholder, placeholder_area, buf);
    }
}
