//! Loopback TCP peer.
//!
//! [`EchoServer`] listens on an ephemeral localhost port and answers every
//! read according to its [`PeerBehavior`]. Every chunk it reads is recorded
//! so tests can check exactly what went over the wire.

#![allow(clippy::disallowed_types, reason = "Synchronous locking operations only")]

use std::{
    io,
    net::SocketAddr,
    sync::{Arc, Mutex, PoisonError},
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
    task::JoinHandle,
};

/// How the peer answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeerBehavior {
    /// Write back exactly what was read.
    Echo,
    /// Write back the read bytes upper-cased.
    Uppercase,
    /// Echo this many reads, then close the connection without replying.
    HangUpAfter(usize),
}

/// Loopback TCP peer for end-to-end tests.
pub struct EchoServer {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<Vec<u8>>>>,
    task: JoinHandle<()>,
}

impl EchoServer {
    /// Bind to `127.0.0.1:0` and start serving.
    pub async fn start(behavior: PeerBehavior) -> io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let received = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&received);
        let task = tokio::spawn(async move {
            while let Ok((stream, peer)) = listener.accept().await {
                tracing::debug!(%peer, "peer accepted");
                let log = Arc::clone(&log);
                tokio::spawn(async move {
                    if let Err(e) = serve(stream, behavior, log).await {
                        tracing::debug!("peer connection ended: {e}");
                    }
                });
            }
        });

        Ok(Self { addr, received, task })
    }

    /// Host to dial.
    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    /// Port to dial.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Chunks read so far, in order.
    pub fn received(&self) -> Vec<Vec<u8>> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Chunks read so far, decoded as UTF-8.
    pub fn received_text(&self) -> Vec<String> {
        self.received().iter().map(|chunk| String::from_utf8_lossy(chunk).into_owned()).collect()
    }
}

impl Drop for EchoServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn serve(
    mut stream: TcpStream,
    behavior: PeerBehavior,
    log: Arc<Mutex<Vec<Vec<u8>>>>,
) -> io::Result<()> {
    let mut buf = vec![0u8; 4096];
    let mut answered = 0usize;

    loop {
        let n = stream.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        let chunk = buf[..n].to_vec();
        log.lock().unwrap_or_else(PoisonError::into_inner).push(chunk.clone());

        let reply = match behavior {
            PeerBehavior::Echo => chunk,
            PeerBehavior::Uppercase => chunk.to_ascii_uppercase(),
            PeerBehavior::HangUpAfter(limit) if answered >= limit => return Ok(()),
            PeerBehavior::HangUpAfter(_) => chunk,
        };

        stream.write_all(&reply).await?;
        answered = answered.saturating_add(1);
    }
}
