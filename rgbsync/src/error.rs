//! Error types for rgbsync.

use std::io;
use thiserror::Error;

/// Result type for rgbsync operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for rgbsync operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (stdin, file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The external control program could not be started.
    #[error("Failed to launch {program}: {source}")]
    Launch {
        /// Program that was being launched.
        program: String,
        /// Underlying launch error.
        source: io::Error,
    },

    /// The device listing subcommand exited unsuccessfully.
    #[error("Device listing failed (exit status: {})", status.map_or_else(|| "none".to_string(), |c| c.to_string()))]
    ListFailed {
        /// Exit code, if the process exited normally.
        status: Option<i32>,
    },
}
