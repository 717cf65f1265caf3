//! Application state management.
//!
//! Owns the directory view state, the input mode and the pending load task,
//! and maps key presses to view events.

use crate::directory::models::{INDUSTRIES, LOCATIONS, cycle_option};
use crate::directory::{DirectoryClient, LoadOutcome};
use crate::view::{ViewEvent, ViewState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::task::JoinHandle;
use tracing::{debug, trace};

/// Input mode of the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Page navigation
    Table,
    /// Typing into the search bar
    Search,
    /// Changing the location and industry selectors
    Filters,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Directory view state
    pub view: ViewState,
    /// Current UI mode
    pub mode: UiMode,
    /// Status message to display
    pub status_message: Option<String>,
    /// Set when the user asked to quit
    pub should_quit: bool,
    /// Loader for the company list
    client: DirectoryClient,
    /// Pending load, if any
    load_task: Option<JoinHandle<LoadOutcome>>,
}

impl App {
    /// Create a new application state.
    ///
    /// # Arguments
    /// * `client` - Loader used for the initial load and reloads
    ///
    /// # Returns
    /// * `App` - New application state with an empty company list
    pub fn new(client: DirectoryClient) -> Self {
        Self {
            view: ViewState::default(),
            mode: UiMode::Table,
            status_message: None,
            should_quit: false,
            client,
            load_task: None,
        }
    }

    /// Apply a view event.
    pub fn dispatch(&mut self, event: ViewEvent) {
        trace!("Dispatch: {:?}", event);
        let view = std::mem::take(&mut self.view);
        self.view = view.reduce(event);
    }

    /// Start loading the company list in the background.
    ///
    /// # Details
    /// A load that is already running is not cancelled; only the newest
    /// task's outcome is applied.
    pub fn start_load(&mut self) {
        let client = self.client.clone();
        self.load_task = Some(tokio::spawn(async move { client.load_outcome().await }));
        self.set_status("Loading companies...".to_string());
    }

    /// Whether a load is still pending.
    pub fn is_loading(&self) -> bool {
        self.load_task.is_some()
    }

    /// Apply the pending load's outcome if it has finished.
    ///
    /// # Details
    /// Returns immediately when nothing has finished yet. A task that
    /// panicked is treated as a failed load.
    pub async fn poll_load(&mut self) {
        let Some(task) = self.load_task.take_if(|task| task.is_finished()) else {
            return;
        };

        let outcome = match task.await {
            Ok(outcome) => outcome,
            Err(e) => LoadOutcome::Failed(format!("load task failed: {}", e)),
        };
        self.finish_load(outcome);
    }

    /// Feed a load outcome into the view.
    ///
    /// # Details
    /// Failures are not surfaced in the UI; they were already logged by the
    /// loader.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        match &outcome {
            LoadOutcome::Loaded(companies) => {
                self.set_status(loaded_message(companies.len()));
            }
            LoadOutcome::Failed(reason) => {
                debug!("Load failed, keeping current list: {}", reason);
                self.clear_status();
            }
        }
        self.dispatch(ViewEvent::Loaded(outcome));
    }

    /// Handle a key press according to the current mode.
    ///
    /// # Arguments
    /// * `key` - Key event from the terminal
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        trace!("Key: {:?} in {:?}", key, self.mode);

        match self.mode {
            UiMode::Table => self.handle_table_key(key),
            UiMode::Search => self.handle_search_key(key),
            UiMode::Filters => self.handle_filters_key(key),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => self.previous_page(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => self.next_page(),
            KeyCode::Char('/') => self.mode = UiMode::Search,
            KeyCode::Char('f') => self.mode = UiMode::Filters,
            KeyCode::Char('r') => self.start_load(),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.mode = UiMode::Table,
            KeyCode::Backspace => {
                let mut text = self.view.search_text.clone();
                text.pop();
                self.dispatch(ViewEvent::SearchChanged(text));
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch(ViewEvent::SearchChanged(String::new()));
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut text = self.view.search_text.clone();
                text.push(c);
                self.dispatch(ViewEvent::SearchChanged(text));
            }
            _ => {}
        }
    }

    fn handle_filters_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('f') => self.mode = UiMode::Table,
            KeyCode::Char('l') => self.cycle_location(true),
            KeyCode::Char('L') => self.cycle_location(false),
            KeyCode::Char('i') => self.cycle_industry(true),
            KeyCode::Char('I') => self.cycle_industry(false),
            KeyCode::Char('c') => {
                self.dispatch(ViewEvent::LocationChanged(String::new()));
                self.dispatch(ViewEvent::IndustryChanged(String::new()));
            }
            _ => {}
        }
    }

    /// Go to the previous page if possible.
    pub fn previous_page(&mut self) {
        self.dispatch(ViewEvent::PreviousPage);
    }

    /// Go to the next page if possible.
    pub fn next_page(&mut self) {
        self.dispatch(ViewEvent::NextPage);
    }

    fn cycle_location(&mut self, forward: bool) {
        let next = cycle_option(&LOCATIONS, &self.view.location_filter, forward);
        self.dispatch(ViewEvent::LocationChanged(next.to_string()));
    }

    fn cycle_industry(&mut self, forward: bool) {
        let next = cycle_option(&INDUSTRIES, &self.view.industry_filter, forward);
        self.dispatch(ViewEvent::IndustryChanged(next.to_string()));
    }

    /// Set status message.
    ///
    /// # Arguments
    /// * `message` - Status message to display
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    /// Clear status message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

fn loaded_message(count: usize) -> String {
    match count {
        1 => "Loaded 1 company".to_string(),
        n => format!("Loaded {} companies", n),
    }
}
