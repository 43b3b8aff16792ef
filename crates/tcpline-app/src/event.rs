//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events come from the terminal (keys, resize) or from the duplex loop
//! (responses, connection loss).

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Text returned by the remote end for one submitted line.
    Response(String),

    /// The connection failed and the session is over.
    ConnectionLost {
        /// Error description.
        message: String,
    },
}
