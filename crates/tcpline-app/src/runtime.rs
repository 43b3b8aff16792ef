//! Generic runtime for application orchestration.
//!
//! The Runtime is the top-level controller. It races two activities:
//! - input: events from the [`Driver`] are fed to the [`App`]
//! - display sink: responses drained from the [`DuplexSession`] inbound queue
//!
//! The duplex loop itself runs on its own task. When it fails, the inbound
//! queue closes and the runtime returns the transport error instead of
//! exiting, leaving the decision to terminate to the caller.

use tcpline_client::{DuplexSession, TransportError};
use thiserror::Error;

use crate::{App, AppAction, AppEvent, Driver};

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError<E>
where
    E: std::error::Error + 'static,
{
    /// Terminal driver failure.
    #[error("driver error: {0}")]
    Driver(#[source] E),

    /// Connection failure after the session started.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// What woke the event loop.
enum Wake<E> {
    Response(Option<String>),
    Input(Result<Option<AppEvent>, E>),
}

/// Generic runtime that orchestrates App, Driver and the duplex session.
pub struct Runtime<D>
where
    D: Driver,
{
    driver: D,
    app: App,
    session: DuplexSession,
}

impl<D> Runtime<D>
where
    D: Driver,
{
    /// Create a new runtime over an already connected session.
    pub fn new(driver: D, app: App, session: DuplexSession) -> Self {
        Self { driver, app, session }
    }

    /// Run the main event loop until the user quits or the connection fails.
    ///
    /// # Errors
    ///
    /// Returns [`RuntimeError::Transport`] on the first write or read failure
    /// and [`RuntimeError::Driver`] if the terminal fails.
    pub async fn run(mut self) -> Result<(), RuntimeError<D::Error>> {
        if let Err(e) = self.driver.render(&self.app) {
            self.driver.stop();
            self.session.abort();
            return Err(RuntimeError::Driver(e));
        }

        let result = match self.event_loop().await {
            Ok(Exit::Quit) => {
                tracing::info!("session ended by user");
                self.session.abort();
                Ok(())
            },
            Ok(Exit::SessionEnded) => {
                let error = match self.session.finish().await {
                    Ok(()) => TransportError::Closed,
                    Err(e) => e,
                };
                tracing::error!("connection lost: {error}");

                let _ = self.app.handle(AppEvent::ConnectionLost { message: error.to_string() });
                if let Err(e) = self.driver.render(&self.app) {
                    tracing::warn!("failed to render: {e}");
                }
                Err(RuntimeError::Transport(error))
            },
            Err(e) => {
                self.session.abort();
                Err(e)
            },
        };

        self.driver.stop();
        result
    }

    async fn event_loop(&mut self) -> Result<Exit, RuntimeError<D::Error>> {
        loop {
            let wake = tokio::select! {
                biased;

                response = self.session.recv_response() => Wake::Response(response),
                event = self.driver.poll_event() => Wake::Input(event),
            };

            let actions = match wake {
                Wake::Response(Some(text)) => self.app.handle(AppEvent::Response(text)),
                Wake::Response(None) => return Ok(Exit::SessionEnded),
                Wake::Input(Ok(Some(event))) => self.app.handle(event),
                Wake::Input(Ok(None)) => continue,
                Wake::Input(Err(e)) => return Err(RuntimeError::Driver(e)),
            };

            if let Some(exit) = self.process_actions(actions)? {
                return Ok(exit);
            }
        }
    }

    /// Execute actions returned by the App.
    fn process_actions(
        &mut self,
        actions: Vec<AppAction>,
    ) -> Result<Option<Exit>, RuntimeError<D::Error>> {
        for action in actions {
            match action {
                AppAction::Render => self.driver.render(&self.app).map_err(RuntimeError::Driver)?,
                AppAction::Quit => return Ok(Some(Exit::Quit)),
                AppAction::Send { line } => {
                    tracing::debug!(len = line.len(), "queueing line");
                    if !self.session.send_line(line) {
                        tracing::warn!("duplex loop stopped, line dropped");
                    }
                },
            }
        }
        Ok(None)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }
}

/// Why the event loop stopped.
enum Exit {
    Quit,
    SessionEnded,
}
