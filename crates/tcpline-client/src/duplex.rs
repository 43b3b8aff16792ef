//! Duplex loop.
//!
//! A spawned task owns the [`Connection`] for its whole lifetime. It blocks on
//! the outbound queue, performs one write/read round trip per line and pushes
//! the decoded response onto the inbound queue. Lines are processed strictly
//! one at a time, so the nth response is queued before the (n+1)th line is
//! written.
//!
//! The task never terminates the process: its first transport failure is
//! returned through [`DuplexSession::finish`] for the caller to act on.

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc,
    task::JoinHandle,
};

use crate::{Connection, TransportError};

/// Handle to a running duplex loop.
///
/// Holds the producer end of the outbound queue and the consumer end of the
/// inbound queue. Both queues are unbounded and FIFO.
#[derive(Debug)]
pub struct DuplexSession {
    outbound: mpsc::UnboundedSender<String>,
    inbound: mpsc::UnboundedReceiver<String>,
    task: JoinHandle<Result<(), TransportError>>,
}

impl DuplexSession {
    /// Spawn the duplex loop on the current tokio runtime.
    pub fn spawn<S>(connection: Connection<S>) -> Self
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run_duplex(connection, outbound_rx, inbound_tx));

        Self { outbound: outbound_tx, inbound: inbound_rx, task }
    }

    /// Queue a line for sending.
    ///
    /// Returns `false` if the loop has already stopped; the caller learns why
    /// from [`Self::finish`].
    pub fn send_line(&self, line: String) -> bool {
        self.outbound.send(line).is_ok()
    }

    /// Wait for the next response.
    ///
    /// Returns `None` once the loop has stopped and every queued response has
    /// been drained. Cancel safe.
    pub async fn recv_response(&mut self) -> Option<String> {
        self.inbound.recv().await
    }

    /// Wait for the loop to stop and return its outcome.
    pub async fn finish(self) -> Result<(), TransportError> {
        let Self { outbound, inbound, task } = self;
        drop(outbound);
        drop(inbound);

        match task.await {
            Ok(result) => result,
            Err(e) => Err(TransportError::Terminated(e.to_string())),
        }
    }

    /// Stop the loop without waiting for an in-flight read.
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// Writer/reader cycle.
///
/// Ends with `Ok(())` when either queue is closed by the other side, or with
/// the first transport error.
async fn run_duplex<S>(
    mut connection: Connection<S>,
    mut outbound: mpsc::UnboundedReceiver<String>,
    inbound: mpsc::UnboundedSender<String>,
) -> Result<(), TransportError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    while let Some(line) = outbound.recv().await {
        let bytes = match connection.send_and_receive(&line).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!("transport failure: {e}");
                return Err(e);
            },
        };

        let text = String::from_utf8_lossy(&bytes).into_owned();
        if inbound.send(text).is_err() {
            tracing::debug!("inbound queue closed, stopping duplex loop");
            break;
        }
    }

    tracing::debug!("duplex loop finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt, duplex};

    use super::*;

    #[tokio::test]
    async fn responses_arrive_in_submission_order() {
        let (client, mut server) = duplex(256);
        let mut session = DuplexSession::spawn(Connection::from_stream(client));

        let peer = tokio::spawn(async move {
            let mut buf = [0u8; 64];
            for _ in 0..3 {
                let n = server.read(&mut buf).await.unwrap();
                let mut reply = b"re:".to_vec();
                reply.extend_from_slice(&buf[..n]);
                server.write_all(&reply).await.unwrap();
            }
            server
        });

        assert!(session.send_line("one\n".into()));
        assert!(session.send_line("two\n".into()));
        assert!(session.send_line("three\n".into()));

        assert_eq!(session.recv_response().await.as_deref(), Some("re:one\n"));
        assert_eq!(session.recv_response().await.as_deref(), Some("re:two\n"));
        assert_eq!(session.recv_response().await.as_deref(), Some("re:three\n"));

        let server = peer.await.unwrap();
        session.finish().await.unwrap();
        drop(server);
    }

    #[tokio::test]
    async fn invalid_utf8_is_decoded_lossily() {
        let (client, mut server) = duplex(64);
        let mut session = DuplexSession::spawn(Connection::from_stream(client));

        let peer = tokio::spawn(async move {
            let mut buf = [0u8; 8];
            let _ = server.read(&mut buf).await.unwrap();
            server.write_all(&[b'o', 0xff, b'k']).await.unwrap();
            server
        });

        session.send_line("\n".into());
        assert_eq!(session.recv_response().await.as_deref(), Some("o\u{fffd}k"));
        drop(peer.await.unwrap());
    }

    #[tokio::test]
    async fn transport_failure_closes_inbound_and_is_returned() {
        let (client, server) = duplex(64);
        let mut session = DuplexSession::spawn(Connection::from_stream(client));
        drop(server);

        session.send_line("hello\n".into());

        assert_eq!(session.recv_response().await, None);
        let err = session.finish().await.unwrap_err();
        assert!(matches!(err, TransportError::Write(_) | TransportError::Closed));
    }

    #[tokio::test]
    async fn dropping_outbound_ends_loop_cleanly() {
        let (client, _server) = duplex(64);
        let session = DuplexSession::spawn(Connection::from_stream(client));

        assert!(session.finish().await.is_ok());
    }

    #[tokio::test]
    async fn abort_reports_terminated() {
        let (client, _server) = duplex(64);
        let session = DuplexSession::spawn(Connection::from_stream(client));

        session.send_line("stuck\n".into());
        tokio::task::yield_now().await;
        session.abort();

        assert!(matches!(session.finish().await, Err(TransportError::Terminated(_))));
    }
}
