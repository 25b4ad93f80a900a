//! Error types for the I/O boundary (config files, high-score storage).
//!
//! The simulation itself never fails: out-of-range states are clamped every
//! frame. Only loading and saving data can go wrong.

use std::fmt;

/// Top-level error enum for tower-climb.
#[derive(Debug)]
pub enum GameError {
    /// Reading or writing a file failed.
    Io(std::io::Error),

    /// A config file was not valid JSON for [`crate::GameConfig`].
    Parse(serde_json::Error),

    /// A config value is outside the range the simulation can handle.
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// Human-readable description of what was expected.
        reason: &'static str,
    },

    /// The backing storage is not available (e.g. LocalStorage disabled).
    StorageUnavailable,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "i/o error: {}", e),
            GameError::Parse(e) => write!(f, "config parse error: {}", e),
            GameError::InvalidConfig { field, reason } => {
                write!(f, "invalid config value '{}': {}", field, reason)
            }
            GameError::StorageUnavailable => write!(f, "storage unavailable"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Parse(e)
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;
