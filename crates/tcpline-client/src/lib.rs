//! Client side of tcpline
//!
//! Owns the single TCP connection to the remote endpoint and the duplex loop
//! that moves lines between the user interface and the socket.
//!
//! # Components
//!
//! - [`Connection`]: one byte stream, one write then one read per line
//! - [`DuplexSession`]: task pairing socket writes with reads, fed by an
//!   outbound queue and draining into an inbound queue

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod duplex;
pub mod error;
pub mod transport;

pub use duplex::DuplexSession;
pub use error::{ConnectError, TransportError};
pub use transport::{Connection, READ_BUFFER_SIZE};
