//! Session state and its pure transition function.
//!
//! `reduce` performs no I/O. Persistence and audio happen in the `Terminal`
//! controller around it.

use chrono::{DateTime, Local};

use termfolio_skin::Theme;

/// One line of the scrollback.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The submitted line. `None` for boot messages and completion hints.
    pub command: Option<String>,
    pub output: String,
    /// Theme in effect when the entry was produced. Never updated afterwards.
    pub theme: Theme,
    pub is_system: bool,
    /// Output is an error message (rendered in the theme's error color).
    pub is_error: bool,
    pub timestamp: DateTime<Local>,
}

impl HistoryEntry {
    /// A submitted command and its output.
    pub fn command(
        command: impl Into<String>,
        output: impl Into<String>,
        theme: Theme,
        timestamp: DateTime<Local>,
    ) -> Self {
        Self {
            command: Some(command.into()),
            output: output.into(),
            theme,
            is_system: false,
            is_error: false,
            timestamp,
        }
    }

    /// A commandless system line (boot message, hint, `^C`).
    pub fn system(output: impl Into<String>, theme: Theme, timestamp: DateTime<Local>) -> Self {
        Self {
            command: None,
            output: output.into(),
            theme,
            is_system: true,
            is_error: false,
            timestamp,
        }
    }

    pub fn with_error(mut self, is_error: bool) -> Self {
        self.is_error = is_error;
        self
    }

    /// Whether history navigation can recall this entry.
    pub fn is_recallable(&self) -> bool {
        self.command.is_some() && !self.is_system
    }
}

/// The single mutable aggregate of a terminal session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    /// Scrollback, oldest first. Append-only except for full truncation.
    pub history: Vec<HistoryEntry>,
    /// The unsubmitted edit line.
    pub input: String,
    /// Caret position in chars, `0..=input.chars().count()`.
    pub caret: usize,
    /// Recall position, counted from the most recent command. `None` when
    /// not browsing.
    pub history_cursor: Option<usize>,
    pub active_theme: Theme,
    pub sound_enabled: bool,
}

/// A state transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the edit line; the caret moves to its end.
    SetInput(String),
    /// Move the caret, clamped to the edit line.
    SetCaret(usize),
    AddToHistory(HistoryEntry),
    /// Truncate the scrollback. Also stops history browsing.
    ClearHistory,
    SetTheme(Theme),
    SetSound(bool),
    SetCommandIndex(Option<usize>),
}

impl SessionState {
    /// A fresh session with empty history.
    pub fn new(active_theme: Theme, sound_enabled: bool) -> Self {
        Self {
            history: Vec::new(),
            input: String::new(),
            caret: 0,
            history_cursor: None,
            active_theme,
            sound_enabled,
        }
    }

    /// Apply `action` in place.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetInput(input) => {
                self.caret = input.chars().count();
                self.input = input;
            },
            Action::SetCaret(caret) => {
                self.caret = caret.min(self.input_len());
            },
            Action::AddToHistory(entry) => self.history.push(entry),
            Action::ClearHistory => {
                self.history.clear();
                self.history_cursor = None;
            },
            Action::SetTheme(theme) => self.active_theme = theme,
            Action::SetSound(enabled) => self.sound_enabled = enabled,
            Action::SetCommandIndex(index) => self.history_cursor = index,
        }
    }

    /// Length of the edit line in chars.
    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    /// Recallable commands, oldest first.
    pub fn recallable_commands(&self) -> Vec<&str> {
        self.history
            .iter()
            .filter(|e| e.is_recallable())
            .filter_map(|e| e.command.as_deref())
            .collect()
    }
}

/// Pure transition function: `state` after `action`.
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    state.apply(action);
    state
}
