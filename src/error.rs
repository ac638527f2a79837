//! Error types for the announcer

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Main error type for announcement attempts
#[derive(Error, Debug)]
pub enum AnnounceError {
    /// The speech command ran but reported failure
    #[error("speech command `{command}` failed: {status}")]
    CommandFailed { command: String, status: ExitStatus },

    /// The speech command binary does not exist on this system
    #[error("speech command `{0}` not found")]
    CommandNotFound(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for announcer operations
pub type Result<T> = std::result::Result<T, AnnounceError>;

impl From<String> for AnnounceError {
    fn from(s: String) -> Self {
        AnnounceError::Speech(s)
    }
}

impl From<&str> for AnnounceError {
    fn from(s: &str) -> Self {
        AnnounceError::Speech(s.to_string())
    }
}
