//! Application layer for tcpline
//!
//! Pure state machines and a generic runtime binding terminal input to the
//! duplex session, so the same orchestration runs under a real terminal and
//! in simulation.
//!
//! # Components
//!
//! - [`LineEditor`]: edit buffer, [`History`] and history cursor
//! - [`App`]: UI state machine (key mapping, transcript, connection state)
//! - [`Driver`]: Trait for platform-specific terminal I/O
//! - [`Runtime`]: Orchestration loop using a Driver and a
//!   [`tcpline_client::DuplexSession`]

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod driver;
mod editor;
mod event;
mod history;
mod input;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::App;
pub use driver::Driver;
pub use editor::LineEditor;
pub use event::AppEvent;
pub use history::History;
pub use input::KeyInput;
pub use runtime::{Runtime, RuntimeError};
pub use state::{ConnectionState, DEFAULT_SCROLLBACK, Entry, Transcript};
