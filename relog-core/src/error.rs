/// Structured error types for relog-core.
///
/// Uses `thiserror` for better API surface and error composition.
/// The binary crate (relog-tui) can still use `anyhow` for convenience,
/// but library consumers get structured, composable errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for relog-core operations
#[derive(Error, Debug)]
pub enum RelogError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON parsing or serialization failed
    #[error("JSON error at {context}: {source}")]
    Json {
        context: String,
        source: serde_json::Error,
    },

    /// The persisted-state location could not be resolved
    #[error("Cannot resolve state path: {reason}")]
    StatePath { reason: String },

    /// State file exists but is not writable as expected
    #[error("Cannot replace state file {path:?}: {source}")]
    StateReplace { path: PathBuf, source: io::Error },
}

/// Result type alias for relog-core operations
pub type Result<T> = std::result::Result<T, RelogError>;

impl RelogError {
    /// Create a JSON error with context
    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            context: context.into(),
            source,
        }
    }

    /// Create a state path error
    pub fn state_path(reason: impl Into<String>) -> Self {
        Self::StatePath {
            reason: reason.into(),
        }
    }

    /// Create a state replace error
    pub fn state_replace(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StateReplace {
            path: path.into(),
            source,
        }
    }
}
