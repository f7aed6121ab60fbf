//! crossterm event mapping.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use termfolio_types::input::{InputEvent, Key, Shortcut};

/// Lines moved by PageUp / PageDown.
pub const PAGE_SCROLL: i32 = 10;
/// Lines moved per mouse wheel notch.
pub const WHEEL_SCROLL: i32 = 3;

/// Translate a terminal event. Events the session has no use for map to
/// `None`.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMove {
                x: i32::from(mouse.column),
                y: i32::from(mouse.row),
            }),
            MouseEventKind::ScrollUp => Some(InputEvent::Scroll {
                lines: WHEEL_SCROLL,
            }),
            MouseEventKind::ScrollDown => Some(InputEvent::Scroll {
                lines: -WHEEL_SCROLL,
            }),
            _ => None,
        },
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char(ch) => Shortcut::from_ctrl(ch).map(InputEvent::Shortcut),
            _ => None,
        };
    }
    let event = match key.code {
        KeyCode::Char(ch) => InputEvent::TextInput(ch),
        KeyCode::Enter => InputEvent::Submit,
        KeyCode::Backspace => InputEvent::Backspace,
        KeyCode::Tab => InputEvent::Key(Key::Tab),
        KeyCode::Up => InputEvent::Key(Key::Up),
        KeyCode::Down => InputEvent::Key(Key::Down),
        KeyCode::Left => InputEvent::Key(Key::Left),
        KeyCode::Right => InputEvent::Key(Key::Right),
        KeyCode::Home => InputEvent::Key(Key::Home),
        KeyCode::End => InputEvent::Key(Key::End),
        KeyCode::PageUp => InputEvent::Scroll { lines: PAGE_SCROLL },
        KeyCode::PageDown => InputEvent::Scroll {
            lines: -PAGE_SCROLL,
        },
        _ => return None,
    };
    Some(event)
}
