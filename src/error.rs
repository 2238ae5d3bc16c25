//! Error types for tag resolution and navigation
//!
//! Only genuine failures live here. A tag that matches nothing, a cancelled
//! choice prompt or a history boundary are ordinary outcomes and are modelled
//! by [`crate::navigator::JumpOutcome`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tag lookups and jumps
#[derive(Error, Debug)]
pub enum TagError {
    /// An index file exists but could not be opened or read
    #[error("Failed to read tag index '{path}': {source}")]
    IndexRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The editor could not open the target of a jump
    #[error("Failed to open '{path}': {reason}")]
    OpenFile { path: PathBuf, reason: String },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl TagError {
    pub fn index_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IndexRead {
            path: path.into(),
            source,
        }
    }

    pub fn open_file(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::OpenFile {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::IndexRead { .. } => "INDEX_READ_ERROR",
            Self::OpenFile { .. } => "OPEN_FILE_ERROR",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::IndexRead { .. } => vec![
                "Check that the tags file is readable by the current user",
                "Regenerate the index with 'ctags -R' if the file is damaged",
            ],
            Self::OpenFile { .. } => vec![
                "The tags file may be stale; regenerate it so paths match the tree",
            ],
            Self::Config { .. } => vec![
                "Run 'tagjump config' to inspect the active settings",
                "Run 'tagjump init --force' to regenerate .tagjump/settings.toml",
            ],
            _ => vec![],
        }
    }
}

/// Result type alias for tag operations
pub type TagResult<T> = Result<T, TagError>;
