//! Terminal event translation.
//!
//! Converts crossterm events into [`AppEvent`]s. Keys with no meaning to the
//! line editor map to `None` and are dropped by the runtime.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tcpline_app::{AppEvent, KeyInput};

use crate::TerminalError;

/// Convert a crossterm key event to a [`KeyInput`].
pub fn key_input(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'C') => Some(KeyInput::Interrupt),
            _ => None,
        };
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Esc => Some(KeyInput::Esc),
        _ => None,
    }
}

/// Translate one item from a crossterm event stream.
///
/// Unreadable events are logged and dropped. The stream ending means the
/// terminal is gone and is an error.
pub fn translate(item: Option<io::Result<Event>>) -> Result<Option<AppEvent>, TerminalError> {
    match item {
        Some(Ok(Event::Key(key))) => {
            let input = key_input(key);
            if input.is_none() {
                tracing::trace!(?key, "unmapped key dropped");
            }
            Ok(input.map(AppEvent::Key))
        },
        Some(Ok(Event::Resize(cols, rows))) => Ok(Some(AppEvent::Resize(cols, rows))),
        Some(Ok(_)) => Ok(None),
        Some(Err(e)) => {
            tracing::warn!("dropping unreadable input event: {e}");
            Ok(None)
        },
        None => Err(TerminalError::InputClosed),
    }
}
