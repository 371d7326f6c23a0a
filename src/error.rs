//! Error types for mpwt.
//!
//! All errors in mpwt are represented by [`MpwtError`], which covers layout
//! synthesis failures, configuration issues, the history store and launching
//! Windows Terminal.

use std::path::PathBuf;
use thiserror::Error;

/// All possible errors that can occur in mpwt.
#[derive(Error, Debug)]
pub enum MpwtError {
    /// A pane or group count below 1 was requested.
    #[error("Invalid count: {0} (must be at least 1)")]
    InvalidCount(usize),

    /// No commands were supplied.
    #[error("No commands supplied")]
    EmptyCommands,

    /// Rendering produced no output.
    #[error("Rendered command is empty")]
    EmptyOutput,

    /// Config file does not exist at the expected path.
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    /// Could not determine the user's config or data directory.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// Config parsed but holds values mpwt cannot use.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failed to read or write a file on disk.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing failed.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The history store could not be encoded or decoded.
    #[error("Failed to read history store: {0}")]
    StoreError(#[from] serde_json::Error),

    /// No history entry at the given (1-based) index.
    #[error("History entry not found: {0}")]
    HistoryNotFound(usize),

    /// Requested favourite does not exist.
    #[error("Favourite not found: {0}")]
    FavouriteNotFound(String),

    /// A favourite with this name is already saved.
    #[error("Favourite already exists: {0}")]
    FavouriteExists(String),

    /// Windows Terminal could not be started.
    #[error("Launch error: {0}")]
    LaunchError(String),

    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    LogInit(String),
}

/// Convenient Result type alias for mpwt operations.
pub type Result<T> = std::result::Result<T, MpwtError>;
