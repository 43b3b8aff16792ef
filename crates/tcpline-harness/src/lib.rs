//! Test harness for tcpline.
//!
//! Lets the production [`tcpline_app::Runtime`] run end to end without a
//! terminal: key input comes from a script and the remote end is a loopback
//! TCP peer whose behaviour the test chooses.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks behavioural properties of the line editor
//! and transcript after every render. Use [`InvariantRegistry::standard()`]
//! for the common set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod echo_server;
pub mod invariants;
pub mod sim_driver;

pub use echo_server::{EchoServer, PeerBehavior};
pub use invariants::{
    CursorInRange, EditorSnapshot, HistoryWellFormed, Invariant, InvariantRegistry,
    InvariantResult, TranscriptWithinLimit, Violation,
};
pub use sim_driver::{SimDriver, SimDriverError, SimHandle, Step};
