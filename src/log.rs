//! Logging.
//!
//! Output goes through `tracing`. [`init`] installs the subscriber once at
//! startup: debug runs log to stderr with source locations, normal runs
//! append to a log file. `RUST_LOG` overrides the default level.
//!
//! Components that want to trace their work take a [`Logger`] rather than
//! reaching for a global. [`TracingLogger`] forwards to `tracing`.

use crate::error::{MpwtError, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Logging capability handed to the components that use it.
pub trait Logger {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    /// Log an unrecoverable failure. Does not exit; that is up to the caller.
    fn fatal(&self, message: &str);
}

/// [`Logger`] backed by the installed `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }

    fn fatal(&self, message: &str) {
        tracing::error!(fatal = true, "{}", message);
    }
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq)]
pub enum LogTarget {
    /// Debug level to stderr, with file and line of each event.
    Development,
    /// Info level appended to the given file, without colours.
    File(PathBuf),
}

/// Install the global `tracing` subscriber.
///
/// # Errors
///
/// - [`MpwtError::IoError`] if the log file cannot be opened
/// - [`MpwtError::LogInit`] if a subscriber is already installed
pub fn init(target: LogTarget) -> Result<()> {
    let installed = match target {
        LogTarget::Development => tracing_subscriber::fmt()
            .with_env_filter(filter("debug"))
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };
    installed.map_err(|e| MpwtError::LogInit(e.to_string()))
}

/// Install logging for `target`, or warn on stderr and carry on without it.
///
/// Returns whether a subscriber was installed. Commands never fail because
/// their log file is unavailable.
pub fn init_or_warn(target: Result<LogTarget>) -> bool {
    match target.and_then(init) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            false
        }
    }
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
