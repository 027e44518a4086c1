//! Error types.
//!
//! None of these reach the user: load failures fall back to defaults and write
//! failures are logged.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing persisted state.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage I/O failed for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed value under key '{key}': {source}")]
    MalformedValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize storage contents: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A stored theme value outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ThemeParseError(pub String);
