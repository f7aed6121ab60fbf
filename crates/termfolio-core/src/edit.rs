//! Pure edit-line transitions: typing, caret movement, history recall and
//! tab completion. Each function maps a state to the next one through
//! `reduce`.

use chrono::{DateTime, Local};

use crate::session::{Action, HistoryEntry, SessionState, reduce};

/// Separator between candidates in a completion hint line.
pub const HINT_SEPARATOR: &str = "    ";

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}

/// Insert `ch` at the caret.
pub fn insert_char(state: SessionState, ch: char) -> SessionState {
    let mut input = state.input.clone();
    input.insert(byte_offset(&input, state.caret), ch);
    let caret = state.caret + 1;
    let state = reduce(state, Action::SetInput(input));
    reduce(state, Action::SetCaret(caret))
}

/// Delete the char before the caret.
pub fn backspace(state: SessionState) -> SessionState {
    if state.caret == 0 {
        return state;
    }
    let mut input = state.input.clone();
    input.remove(byte_offset(&input, state.caret - 1));
    let caret = state.caret - 1;
    let state = reduce(state, Action::SetInput(input));
    reduce(state, Action::SetCaret(caret))
}

pub fn caret_left(state: SessionState) -> SessionState {
    let caret = state.caret.saturating_sub(1);
    reduce(state, Action::SetCaret(caret))
}

pub fn caret_right(state: SessionState) -> SessionState {
    let caret = state.caret + 1;
    reduce(state, Action::SetCaret(caret))
}

pub fn caret_start(state: SessionState) -> SessionState {
    reduce(state, Action::SetCaret(0))
}

pub fn caret_end(state: SessionState) -> SessionState {
    let caret = state.input_len();
    reduce(state, Action::SetCaret(caret))
}

// ---------------------------------------------------------------------------
// History recall
// ---------------------------------------------------------------------------

/// Recall one command further into the past, saturating at the oldest.
pub fn history_up(state: SessionState) -> SessionState {
    let commands = state.recallable_commands();
    let len = commands.len();
    if len == 0 {
        return state;
    }
    let index = match state.history_cursor {
        Some(i) if i + 1 < len => i + 1,
        Some(_) => len - 1,
        None => 0,
    };
    let recalled = commands[len - 1 - index].to_string();
    let state = reduce(state, Action::SetCommandIndex(Some(index)));
    reduce(state, Action::SetInput(recalled))
}

/// Recall one command toward the present. Stepping past the most recent
/// command stops browsing and empties the edit line.
pub fn history_down(state: SessionState) -> SessionState {
    match state.history_cursor {
        Some(0) => {
            let state = reduce(state, Action::SetCommandIndex(None));
            reduce(state, Action::SetInput(String::new()))
        },
        Some(i) => {
            let commands = state.recallable_commands();
            let len = commands.len();
            if len == 0 {
                return state;
            }
            let index = (i - 1).min(len - 1);
            let recalled = commands[len - 1 - index].to_string();
            let state = reduce(state, Action::SetCommandIndex(Some(index)));
            reduce(state, Action::SetInput(recalled))
        },
        None => state,
    }
}

// ---------------------------------------------------------------------------
// Tab completion
// ---------------------------------------------------------------------------

/// Apply completion `candidates` for the current edit line.
///
/// One candidate replaces the word being completed and appends a space.
/// Several add a commandless hint entry and leave the line unchanged. None
/// is a no-op.
pub fn complete(state: SessionState, candidates: &[String], now: DateTime<Local>) -> SessionState {
    match candidates {
        [] => state,
        [only] => {
            let partial = state.input.trim().split(' ').last().unwrap_or_default();
            let cut = state.input.rfind(partial).unwrap_or(0);
            let completed = format!("{}{only} ", &state.input[..cut]);
            reduce(state, Action::SetInput(completed))
        },
        many => {
            let hint = HistoryEntry::system(
                many.join(HINT_SEPARATOR),
                state.active_theme.clone(),
                now,
            );
            reduce(state, Action::AddToHistory(hint))
        },
    }
}
