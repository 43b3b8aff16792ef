//! Observable state snapshots for invariant checking.
//!
//! Invariants operate on snapshots rather than live state so a check sees
//! one consistent view.

use tcpline_app::App;

/// Snapshot of the line editor and transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSnapshot {
    /// Edit buffer contents.
    pub buffer: String,
    /// History entries, oldest first.
    pub history: Vec<String>,
    /// History cursor (offset from the end).
    pub cursor: usize,
    /// Transcript entries held.
    pub transcript_len: usize,
    /// Transcript capacity.
    pub transcript_limit: usize,
}

impl EditorSnapshot {
    /// Capture the observable state of an [`App`].
    pub fn from_app(app: &App) -> Self {
        let editor = app.editor();
        Self {
            buffer: editor.buffer().to_owned(),
            history: editor.history().entries().to_vec(),
            cursor: editor.history_cursor(),
            transcript_len: app.transcript().len(),
            transcript_limit: app.transcript().limit(),
        }
    }
}
