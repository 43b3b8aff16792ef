//! Terminal frontends for tcpline
//!
//! Thin shells over [`tcpline_app::Driver`] that provide terminal-specific
//! I/O. All orchestration lives in the generic [`tcpline_app::Runtime`].
//!
//! Two frontends implement the same input state machine contract:
//! - [`TerminalDriver`]: full-screen ratatui UI
//! - [`PlainDriver`]: raw key polling with clear-and-print redraw

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod keymap;
pub mod logging;
pub mod plain;
pub mod terminal;
pub mod ui;

pub use config::{Args, Config, Frontend, LogConfig};
pub use plain::PlainDriver;
pub use terminal::{TerminalDriver, TerminalError};
