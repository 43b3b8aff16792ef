//! Driver trait for abstracting terminal I/O.
//!
//! The [`Driver`] trait decouples the runtime from a specific terminal
//! library. Each frontend implements it, while the generic [`crate::Runtime`]
//! handles orchestration between key input, the line editor and the duplex
//! session.

use std::future::Future;

use crate::{App, AppEvent};

/// Abstracts terminal I/O for the application runtime.
///
/// # Implementations
///
/// - **TUI**: crossterm event stream with a ratatui screen
/// - **Plain**: crossterm event stream, clear-and-print redraw
/// - **Simulation**: scripted key input for tests
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `Ok(None)` when an event was consumed but maps to nothing
    /// (unrecognized keys are dropped this way). Must be cancel safe: the
    /// runtime races it against incoming responses.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Redraw the whole UI from application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release input resources before the runtime returns.
    fn stop(&mut self);
}
