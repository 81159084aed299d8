//! Error types for the command code library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the command code library.
///
/// Code generation itself never fails; every variant here belongs to the
/// storage and lookup layers built on top of it.
#[derive(Error, Debug)]
pub enum CodeError {
    /// The command never appeared in the most recent command log
    #[error("command not found in latest command log: {0}")]
    CommandNotFound(String),

    /// No command log has been stored yet
    #[error("no command log has been stored")]
    NoCommandLog,

    /// A command log id that the store does not know about
    #[error("unknown command log id: {0}")]
    UnknownCommandLog(u64),

    /// A submitted command log exceeds the configured length
    #[error("command log has {tried} commands, maximum is {max}")]
    LogTooLarge { max: usize, tried: usize },

    /// Error loading stored logs or codes
    #[error("Load error: {0}")]
    Load(String),

    /// Error saving logs or codes
    #[error("Save error: {0}")]
    Save(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CodeError {
    /// Whether this error means "nothing to return" rather than a failure.
    ///
    /// Serving layers map these to a not-found response and everything else
    /// to an internal error.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CodeError::CommandNotFound(_) | CodeError::NoCommandLog | CodeError::UnknownCommandLog(_)
        )
    }
}

/// Result type alias for command code operations.
pub type Result<T> = std::result::Result<T, CodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(CodeError::CommandNotFound("LEFT".into()).is_not_found());
        assert!(CodeError::NoCommandLog.is_not_found());
        assert!(CodeError::UnknownCommandLog(7).is_not_found());
        assert!(!CodeError::Save("disk full".into()).is_not_found());
        assert!(!CodeError::LogTooLarge { max: 1, tried: 2 }.is_not_found());
    }

    #[test]
    fn test_display() {
        let err = CodeError::CommandNotFound("GRAB".into());
        assert_eq!(
            err.to_string(),
            "command not found in latest command log: GRAB"
        );
    }
}
