//! TUI application state and logic

use crate::commands::{anagram_query, pattern_query};
use crate::core::PatternQuery;
use crate::engine::MatchEngine;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Maximum number of history entries kept
const HISTORY_LIMIT: usize = 20;

/// Application state
pub struct App<'a> {
    pub engine: MatchEngine<'a>,
    pub mode: QueryMode,
    pub input_buffer: String,
    pub results: Vec<String>,
    /// First visible row of the results panel
    pub scroll: usize,
    /// Results per row, as last laid out by the renderer
    pub result_columns: usize,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    Anagram,
    Pattern,
}

impl QueryMode {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Anagram => "Anagram",
            Self::Pattern => "Pattern",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Anagram => Self::Pattern,
            Self::Pattern => Self::Anagram,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub query: String,
    pub mode: QueryMode,
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(engine: MatchEngine<'a>) -> Self {
        Self {
            engine,
            mode: QueryMode::Anagram,
            input_buffer: String::new(),
            results: Vec::new(),
            scroll: 0,
            result_columns: 1,
            history: Vec::new(),
            messages: vec![
                Message {
                    text: format!("Loaded {} words.", engine.index().len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type letters for anagrams, or use '?' for a pattern.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// Recompute results for the current input
    pub fn refresh(&mut self) {
        self.scroll = 0;
        self.results = match self.mode {
            QueryMode::Anagram => anagram_query(&self.input_buffer, &self.engine).anagrams,
            QueryMode::Pattern => pattern_query(&self.input_buffer, &self.engine).matches,
        };
    }

    pub fn push_char(&mut self, c: char) {
        if c == PatternQuery::WILDCARD && self.mode == QueryMode::Anagram {
            self.mode = QueryMode::Pattern;
            self.add_message("Switched to pattern mode", MessageStyle::Info);
        }
        self.input_buffer.push(c);
        self.refresh();
    }

    pub fn pop_char(&mut self) {
        self.input_buffer.pop();
        self.refresh();
    }

    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.refresh();
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.refresh();
        self.add_message(
            &format!("{} mode", self.mode.label()),
            MessageStyle::Info,
        );
    }

    /// Record the current query in the history
    pub fn submit(&mut self) {
        let query = self.input_buffer.trim().to_lowercase();
        if query.is_empty() {
            self.add_message("Nothing to look up!", MessageStyle::Error);
            return;
        }

        let count = self.results.len();
        self.history.push(HistoryEntry {
            query: query.clone(),
            mode: self.mode,
            count,
        });
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }

        if count == 0 {
            self.add_message(&format!("No results for '{query}'"), MessageStyle::Error);
        } else {
            self.add_message(
                &format!("{count} results for '{query}'"),
                MessageStyle::Success,
            );
        }
    }

    /// Number of rows the results occupy at the current column count
    #[must_use]
    pub fn result_rows(&self) -> usize {
        self.results.len().div_ceil(self.result_columns.max(1))
    }

    /// Record the renderer's column count, keeping the scroll position in range
    pub fn set_result_columns(&mut self, columns: usize) {
        self.result_columns = columns.max(1);
        self.scroll = self.scroll.min(self.result_rows().saturating_sub(1));
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.result_rows() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        log::error!("TUI error: {err}");
    }

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &mut app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.clear_input();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.toggle_mode();
                }
                KeyCode::Up => {
                    app.scroll_up();
                }
                KeyCode::Down => {
                    app.scroll_down();
                }
                KeyCode::Char(c) => {
                    if c.is_alphabetic() || c == PatternQuery::WILDCARD {
                        app.push_char(c);
                    }
                }
                KeyCode::Backspace => {
                    app.pop_char();
                }
                KeyCode::Enter => {
                    app.submit();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
