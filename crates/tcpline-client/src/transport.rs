//! TCP transport.
//!
//! A [`Connection`] writes one newline-terminated line and then performs
//! exactly one read into a fixed-size buffer. Whatever that read returns is
//! the response; no framing is assumed, so a response may be partial.

use bytes::BytesMut;
use tokio::{
    io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt},
    net::TcpStream,
};

use crate::{ConnectError, TransportError};

/// Size of the single read performed after every write.
pub const READ_BUFFER_SIZE: usize = 4096;

/// A bidirectional byte stream to one remote endpoint.
///
/// Generic over the stream so the duplex loop can be driven by in-memory
/// pipes in tests; production uses [`TcpStream`].
#[derive(Debug)]
pub struct Connection<S = TcpStream> {
    stream: S,
    read_buf: BytesMut,
}

impl Connection<TcpStream> {
    /// Dial `host:port`. No retry.
    pub async fn connect(host: &str, port: u16) -> Result<Self, ConnectError> {
        let addr = format!("{host}:{port}");
        tracing::debug!(%addr, "dialling");

        let stream = TcpStream::connect((host, port))
            .await
            .map_err(|source| ConnectError { addr: addr.clone(), source })?;

        if let Err(e) = stream.set_nodelay(true) {
            tracing::warn!("failed to set TCP_NODELAY: {e}");
        }

        tracing::info!(%addr, "connected");
        Ok(Self::from_stream(stream))
    }
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already established stream.
    pub fn from_stream(stream: S) -> Self {
        Self { stream, read_buf: BytesMut::with_capacity(READ_BUFFER_SIZE) }
    }

    /// Write `line` fully, then read once.
    ///
    /// `line` must already carry its trailing newline. Returns the bytes of
    /// that single read, at most [`READ_BUFFER_SIZE`] of them. A zero-byte
    /// read means the remote hung up and is reported as
    /// [`TransportError::Closed`].
    pub async fn send_and_receive(&mut self, line: &str) -> Result<Vec<u8>, TransportError> {
        self.stream.write_all(line.as_bytes()).await.map_err(TransportError::Write)?;
        self.stream.flush().await.map_err(TransportError::Write)?;

        self.read_buf.clear();
        self.read_buf.resize(READ_BUFFER_SIZE, 0);
        let n = self.stream.read(&mut self.read_buf[..]).await.map_err(TransportError::Read)?;
        if n == 0 {
            return Err(TransportError::Closed);
        }

        tracing::debug!(sent = line.len(), received = n, "round trip");
        Ok(self.read_buf[..n].to_vec())
    }
}
