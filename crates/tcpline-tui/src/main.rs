//! tcpline entry point.
//!
//! # Usage
//!
//! ```bash
//! tcpline 127.0.0.1 9000
//! tcpline --plain --log-file tcpline.log --log-level debug example.com 7
//! ```

use std::{fmt::Display, io::Write, process::ExitCode};

use clap::Parser;
use tcpline_app::{App, Driver, Runtime, RuntimeError};
use tcpline_client::{Connection, DuplexSession};
use tcpline_tui::{Args, Config, Frontend, PlainDriver, TerminalDriver, logging};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Wrong argument count is a usage notice, not a failure
            let _ = e.print();
            return ExitCode::SUCCESS;
        },
    };
    let config = Config::from(args);

    if let Err(e) = logging::init(config.log.as_ref()) {
        report(e);
        return ExitCode::FAILURE;
    }

    announce(format_args!("Trying {}", config.addr()));
    let connection = match Connection::connect(&config.host, config.port).await {
        Ok(connection) => connection,
        Err(e) => {
            tracing::error!("{e}");
            report(e);
            return ExitCode::FAILURE;
        },
    };

    let session = DuplexSession::spawn(connection);
    let app = App::new(config.addr()).with_scrollback(config.scrollback);

    match config.frontend {
        Frontend::Tui => match TerminalDriver::new() {
            Ok(driver) => run(driver, app, session).await,
            Err(e) => {
                report(e);
                ExitCode::FAILURE
            },
        },
        Frontend::Plain => match PlainDriver::new() {
            Ok(driver) => run(driver, app, session).await,
            Err(e) => {
                report(e);
                ExitCode::FAILURE
            },
        },
    }
}

/// Drive the session to completion and map the outcome to an exit code.
///
/// The runtime owns the driver, so the terminal is restored before anything
/// is reported here.
async fn run<D: Driver>(driver: D, app: App, session: DuplexSession) -> ExitCode {
    let result = Runtime::new(driver, app, session).run().await;
    if let Err(RuntimeError::Driver(e)) = &result {
        tracing::error!("terminal failure: {e}");
    }

    let (code, message) = outcome(&result);
    if let Some(message) = message {
        report(message);
    }
    code
}

/// Exit code and user-facing report for a finished session.
///
/// Quitting is a success; a lost connection or a terminal failure is not.
fn outcome<E>(result: &Result<(), RuntimeError<E>>) -> (ExitCode, Option<String>)
where
    E: std::error::Error + 'static,
{
    match result {
        Ok(()) => (ExitCode::SUCCESS, None),
        Err(RuntimeError::Transport(e)) => {
            (ExitCode::FAILURE, Some(format!("Error, Connection closed ({e})")))
        },
        Err(RuntimeError::Driver(e)) => (ExitCode::FAILURE, Some(format!("terminal error: {e}"))),
    }
}

fn announce(message: impl Display) {
    let _ = writeln!(std::io::stdout(), "{message}");
}

fn report(message: impl Display) {
    let _ = writeln!(std::io::stderr(), "{message}");
}
