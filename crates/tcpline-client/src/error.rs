//! Client error types.

use std::io;

use thiserror::Error;

/// Initial dial failure. Never retried.
#[derive(Debug, Error)]
#[error("failed to connect to {addr}: {source}")]
pub struct ConnectError {
    /// Address that was dialled (host:port).
    pub addr: String,
    /// Underlying socket error.
    #[source]
    pub source: io::Error,
}

/// Failure on an established connection.
///
/// A remote that hangs up and a network error are deliberately not told
/// apart by callers: both end the session.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Writing the line to the socket failed.
    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    /// Reading the response failed.
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    /// Remote end closed the connection (zero-byte read).
    #[error("connection closed by remote")]
    Closed,

    /// The duplex task ended without reporting a result (panic or abort).
    #[error("duplex task terminated: {0}")]
    Terminated(String),
}
