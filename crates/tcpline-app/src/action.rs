//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Redraw the UI from current state.
    Render,

    /// Quit the application.
    Quit,

    /// Queue a line for the remote end.
    Send {
        /// Newline-terminated line.
        line: String,
    },
}
