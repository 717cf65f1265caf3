//! Company Directory TUI - browse, search and filter a static list of companies.
//!
//! Main entry point and event loop for the application.

mod app;
mod config;
mod directory;
mod logging;
mod ui;
mod view;

use app::App;
use config::Config;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directory::DirectoryClient;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Alignment,
    style::{Modifier, Style},
    text::Line,
    widgets::Paragraph,
};
use std::io;
use std::time::Duration;
use tracing::info;
use ui::pagination::{PageButton, button_at};

const HELP_TEXT: &str =
    "Press 'q' to quit, '/' to search, 'f' for filters, '←'/'→' to change page, 'r' to reload";

/// Main application entry point.
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Loads configuration, sets up logging, starts the company list load and
/// runs the event loop until the user quits.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(None)?;
    logging::init(&config)?;
    let client = DirectoryClient::new(&config);
    info!(source = ?client.source(), "Starting company directory");

    let mut app = App::new(client);
    app.start_load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("Exiting");
    result
}

/// Render the complete UI.
///
/// # Arguments
/// * `f` - Frame to render to
/// * `app` - Application state
/// * `areas` - Layout regions for this frame
fn render_ui(f: &mut ratatui::Frame, app: &App, areas: &ui::Areas) {
    let title = Paragraph::new(Line::from("Companies Directory"))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    f.render_widget(title, areas.title);

    ui::render_search(app, areas.search, f.buffer_mut());
    ui::render_filters(app, areas.filters, f.buffer_mut());
    ui::render_table(app, areas.table, f.buffer_mut());
    ui::render_pagination(app, areas.pagination, f.buffer_mut());

    let status_text = app.status_message.as_deref().unwrap_or(HELP_TEXT);
    f.render_widget(Paragraph::new(Line::from(status_text)), areas.status);
}

/// Main event loop.
///
/// # Arguments
/// * `terminal` - Terminal instance
/// * `app` - Application state
///
/// # Returns
/// * `Result<()>` - Success or error
///
/// # Details
/// Handles keyboard and mouse events, applies finished loads, and renders UI.
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    // Updated on each render, used for mouse click detection
    let mut areas = ui::Areas::default();

    while !app.should_quit {
        if app.is_loading() {
            app.poll_load().await;
        }

        terminal.draw(|f| {
            areas = ui::layout(f.area());
            render_ui(f, app, &areas);
        })?;

        // Non-blocking poll keeps the UI responsive while a load is pending
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => handle_mouse_event(mouse, app, &areas),
                _ => {}
            }
        }
    }

    Ok(())
}

/// Handle mouse events (scroll and click).
///
/// # Arguments
/// * `mouse` - Mouse event
/// * `app` - Application state
/// * `areas` - Layout regions of the last frame
///
/// # Details
/// Scrolling changes page; a left click on either end of the pagination
/// bar presses the matching button.
fn handle_mouse_event(mouse: MouseEvent, app: &mut App, areas: &ui::Areas) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.previous_page(),
        MouseEventKind::ScrollDown => app.next_page(),
        MouseEventKind::Down(MouseButton::Left) => {
            match button_at(areas.pagination, mouse.column, mouse.row) {
                Some(PageButton::Previous) => app.previous_page(),
                Some(PageButton::Next) => app.next_page(),
                None => {}
            }
        }
        _ => {}
    }
}
