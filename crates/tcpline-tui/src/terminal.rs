//! Terminal driver for the full-screen UI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::io::{self, Stdout, stdout};

use crossterm::{
    ExecutableCommand,
    event::EventStream,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tcpline_app::{App, AppEvent, Driver};
use thiserror::Error;

use crate::{keymap, ui};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal event stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Holds raw mode and the alternate screen from construction until
/// [`Driver::stop`] or drop, whichever comes first.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    restored: bool,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        if let Err(e) = stdout().execute(EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout());
        let terminal = match Terminal::new(backend) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = stdout().execute(LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e.into());
            },
        };

        Ok(Self { terminal, event_stream: EventStream::new(), restored: false })
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        if let Err(e) = disable_raw_mode() {
            tracing::warn!("failed to disable raw mode: {e}");
        }
        if let Err(e) = self.terminal.backend_mut().execute(LeaveAlternateScreen) {
            tracing::warn!("failed to leave alternate screen: {e}");
        }
        let _ = self.terminal.show_cursor();
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        keymap::translate(self.event_stream.next().await)
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}
