//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the interactive
//! state of the client completely decoupled from terminal and socket I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Maps key input onto [`LineEditor`] transitions.
//! - Records sent lines and received responses in the [`Transcript`].
//! - Tracks connection state and terminal dimensions for rendering.

use crate::{AppAction, AppEvent, ConnectionState, Entry, KeyInput, LineEditor, Transcript};

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Connection state.
    state: ConnectionState,
    /// Remote address (host:port), for display.
    server_addr: String,
    /// Edit buffer, history and history cursor.
    editor: LineEditor,
    /// Sent lines and responses.
    transcript: Transcript,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
}

impl App {
    /// Create a new App for a session with `server_addr`.
    pub fn new(server_addr: String) -> Self {
        Self {
            state: ConnectionState::Connected,
            server_addr,
            editor: LineEditor::new(),
            transcript: Transcript::default(),
            terminal_size: (80, 24),
        }
    }

    /// Keep at most `limit` transcript entries.
    #[must_use]
    pub fn with_scrollback(mut self, limit: usize) -> Self {
        self.transcript = Transcript::with_limit(limit);
        self
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Response(text) => {
                self.transcript.push(Entry::Received(text));
                vec![AppAction::Render]
            },
            AppEvent::ConnectionLost { message } => {
                self.state = ConnectionState::Closed { reason: message };
                vec![AppAction::Render]
            },
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => self.editor.insert(c),
            KeyInput::Backspace => self.editor.backspace(),
            KeyInput::Up => self.editor.recall_older(),
            KeyInput::Down => self.editor.recall_newer(),
            KeyInput::Enter => return self.submit(),
            KeyInput::Esc | KeyInput::Interrupt => return vec![AppAction::Quit],
        }
        vec![AppAction::Render]
    }

    /// Submit the current buffer.
    fn submit(&mut self) -> Vec<AppAction> {
        let line = self.editor.submit();
        let shown = line.strip_suffix('\n').unwrap_or(&line);
        self.transcript.push(Entry::Sent(shown.to_owned()));

        vec![AppAction::Send { line }, AppAction::Render]
    }

    /// Current connection state.
    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    /// Remote address (host:port).
    pub fn server_addr(&self) -> &str {
        &self.server_addr
    }

    /// Line editor state.
    pub fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Sent lines and responses.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }
}
