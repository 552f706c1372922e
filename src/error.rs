//! Error types for docnotes.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, preparing or opening notes.
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("no such directory: {}", .0.display())]
    SearchRootMissing(PathBuf),

    #[error("invalid manifest {}: {reason}", .path.display())]
    InvalidManifest { path: PathBuf, reason: String },

    #[error("failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to launch editor `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotesError {
    /// Errors that are reported to the user and end the run cleanly.
    /// Everything else is fatal.
    pub fn is_reportable(&self) -> bool {
        matches!(
            self,
            Self::SearchRootMissing(_) | Self::InvalidManifest { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
