//! Command line and runtime configuration.

use std::path::PathBuf;

use clap::Parser;
use tcpline_app::DEFAULT_SCROLLBACK;

/// Interactive line-oriented TCP client
#[derive(Parser, Debug)]
#[command(name = "tcpline")]
#[command(about = "Send typed lines to a TCP endpoint and show what comes back")]
#[command(version)]
pub struct Args {
    /// Remote host name or address
    pub host: String,

    /// Remote port
    pub port: u16,

    /// Use the minimal clear-and-print frontend instead of the full-screen UI
    #[arg(long)]
    pub plain: bool,

    /// Transcript entries kept for display
    #[arg(long, default_value_t = DEFAULT_SCROLLBACK)]
    pub scrollback: usize,

    /// Append logs to this file
    ///
    /// The terminal is in raw mode while the client runs, so logs are never
    /// written to stderr. Without this flag logging is off.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Which terminal frontend drives input and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Frontend {
    /// Full-screen ratatui UI.
    #[default]
    Tui,
    /// Clear-and-print redraw on the normal screen.
    Plain,
}

/// Log file settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// File logs are appended to.
    pub path: PathBuf,
    /// Filter directive, e.g. `debug` or `tcpline_client=trace`.
    pub level: String,
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote host.
    pub host: String,
    /// Remote port.
    pub port: u16,
    /// Terminal frontend.
    pub frontend: Frontend,
    /// Transcript entries kept for display.
    pub scrollback: usize,
    /// Logging, off when `None`.
    pub log: Option<LogConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9000,
            frontend: Frontend::default(),
            scrollback: DEFAULT_SCROLLBACK,
            log: None,
        }
    }
}

impl Config {
    /// Remote address as `host:port`.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let frontend = if args.plain { Frontend::Plain } else { Frontend::Tui };
        let log = args.log_file.map(|path| LogConfig { path, level: args.log_level });

        Self { host: args.host, port: args.port, frontend, scrollback: args.scrollback, log }
    }
}
