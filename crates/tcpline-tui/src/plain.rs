//! Plain terminal driver.
//!
//! Raw key polling on the normal screen. Every render clears the screen and
//! prints the latest response followed by the line being edited.

use std::io::{self, Write, stdout};

use crossterm::{
    cursor::{MoveTo, MoveToNextLine},
    event::EventStream,
    queue,
    style::Print,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use tcpline_app::{App, AppEvent, ConnectionState, Driver};

use crate::{TerminalError, keymap};

/// Minimal driver: raw mode only, full redraw by clear and print.
pub struct PlainDriver {
    event_stream: EventStream,
    restored: bool,
}

impl PlainDriver {
    /// Enter raw mode.
    pub fn new() -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        Ok(Self { event_stream: EventStream::new(), restored: false })
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        if let Err(e) = disable_raw_mode() {
            tracing::warn!("failed to disable raw mode: {e}");
        }
        let mut out = stdout();
        let _ = queue!(out, MoveToNextLine(1));
        let _ = out.flush();
    }
}

/// Write one full frame to `out`.
///
/// Raw mode does not translate `\n`, so every line is ended with an explicit
/// cursor move.
pub fn draw<W: Write>(out: &mut W, app: &App) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;
    queue!(
        out,
        Print(format!("Connected to {}. To exit press ESC or Ctrl+C", app.server_addr())),
        MoveToNextLine(1)
    )?;

    if let Some(text) = app.transcript().last_received() {
        for line in text.lines() {
            queue!(out, Print(line), MoveToNextLine(1))?;
        }
    }

    if let ConnectionState::Closed { reason } = app.connection_state() {
        queue!(out, Print(format!("Error, Connection closed ({reason})")), MoveToNextLine(1))?;
    }

    queue!(out, Print(app.editor().buffer()))?;
    out.flush()
}

impl Driver for PlainDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        keymap::translate(self.event_stream.next().await)
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let mut out = stdout().lock();
        draw(&mut out, app)?;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for PlainDriver {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use tcpline_app::KeyInput;

    use super::*;

    fn frame(app: &App) -> String {
        let mut out = Vec::new();
        draw(&mut out, app).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn frame_shows_latest_response_and_buffer() {
        let mut app = App::new("127.0.0.1:9000".into());
        let _ = app.handle(AppEvent::Response("old\n".into()));
        let _ = app.handle(AppEvent::Response("line one\nline two\n".into()));
        for c in "typed".chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }

        let text = frame(&app);
        assert!(text.contains("Connected to 127.0.0.1:9000"));
        assert!(text.contains("line one"));
        assert!(text.contains("line two"));
        assert!(!text.contains("old"));
        assert!(text.ends_with("typed"));
    }

    #[test]
    fn frame_reports_closed_connection() {
        let mut app = App::new("127.0.0.1:9000".into());
        let _ = app.handle(AppEvent::ConnectionLost { message: "connection closed by remote".into() });

        assert!(frame(&app).contains("Error, Connection closed (connection closed by remote)"));
    }
}
