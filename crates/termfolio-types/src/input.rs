//! Platform-agnostic input event types.
//!
//! The presentation backend maps its native key events to these enums. The
//! session state machine never sees raw terminal input.

use serde::{Deserialize, Serialize};

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Printable character typed into the edit line.
    TextInput(char),
    /// Backspace / delete-left.
    Backspace,
    /// Enter pressed: submit the edit line.
    Submit,
    /// A navigation or editing key.
    Key(Key),
    /// A modifier-key combination.
    Shortcut(Shortcut),
    /// Pointer moved to an absolute cell position.
    PointerMove { x: i32, y: i32 },
    /// Scroll the scrollback view. Positive `lines` move toward older output.
    Scroll { lines: i32 },
    /// User requested quit (window close, signal, etc.).
    Quit,
}

/// Navigation keys that map across all backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Tab,
}

/// Control-key shortcuts understood by the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shortcut {
    /// Ctrl+L: clear the scrollback.
    ClearScreen,
    /// Ctrl+U: clear the edit line.
    ClearLine,
    /// Ctrl+C: drop the edit line and print `^C`.
    Cancel,
    /// Ctrl+A: caret to start of line.
    CaretStart,
    /// Ctrl+E: caret to end of line.
    CaretEnd,
    /// Ctrl+D: end of input (quits on an empty line).
    EndOfInput,
}

impl Shortcut {
    /// Map the letter pressed together with Ctrl to a shortcut.
    pub fn from_ctrl(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'l' => Some(Self::ClearScreen),
            'u' => Some(Self::ClearLine),
            'c' => Some(Self::Cancel),
            'a' => Some(Self::CaretStart),
            'e' => Some(Self::CaretEnd),
            'd' => Some(Self::EndOfInput),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_unicode() {
        let e = InputEvent::TextInput('\u{1F600}');
        if let InputEvent::TextInput(ch) = e {
            assert_eq!(ch, '\u{1F600}');
        } else {
            panic!("wrong variant");
        }
    }

    #[test]
    fn key_events_differ() {
        assert_ne!(InputEvent::Key(Key::Up), InputEvent::Key(Key::Down));
        assert_eq!(InputEvent::Key(Key::Tab), InputEvent::Key(Key::Tab));
    }

    #[test]
    fn ctrl_letters_map_to_shortcuts() {
        assert_eq!(Shortcut::from_ctrl('l'), Some(Shortcut::ClearScreen));
        assert_eq!(Shortcut::from_ctrl('u'), Some(Shortcut::ClearLine));
        assert_eq!(Shortcut::from_ctrl('c'), Some(Shortcut::Cancel));
        assert_eq!(Shortcut::from_ctrl('a'), Some(Shortcut::CaretStart));
        assert_eq!(Shortcut::from_ctrl('e'), Some(Shortcut::CaretEnd));
        assert_eq!(Shortcut::from_ctrl('d'), Some(Shortcut::EndOfInput));
    }

    #[test]
    fn ctrl_letters_are_case_insensitive() {
        assert_eq!(Shortcut::from_ctrl('L'), Some(Shortcut::ClearScreen));
    }

    #[test]
    fn unmapped_ctrl_letter_is_none() {
        assert_eq!(Shortcut::from_ctrl('z'), None);
        assert_eq!(Shortcut::from_ctrl('1'), None);
    }

    #[test]
    fn pointer_move_event() {
        let e = InputEvent::PointerMove { x: 10, y: -2 };
        assert_eq!(e, InputEvent::PointerMove { x: 10, y: -2 });
    }

    #[test]
    fn key_serde_roundtrip() {
        let json = serde_json::to_string(&Key::Home).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Key::Home);
    }
}
