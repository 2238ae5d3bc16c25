//! Exit codes for CLI operations following Unix conventions.
//!
//! - `0`: Success
//! - `1`: General error
//! - `3`: Nothing to jump to (no match, cancelled prompt)
//! - `5`: File I/O error
//! - `6`: Configuration error

use crate::error::TagError;
use crate::navigator::JumpOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    /// Tag not found, prompt cancelled, or nothing under the caret
    NotFound = 3,
    IoError = 5,
    ConfigError = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `TagError` to the appropriate exit code.
    pub fn from_error(error: &TagError) -> Self {
        match error {
            TagError::IndexRead { .. } | TagError::OpenFile { .. } | TagError::Io(_) => {
                ExitCode::IoError
            }
            TagError::Config { .. } => ExitCode::ConfigError,
            TagError::General(_) => ExitCode::GeneralError,
        }
    }

    /// Exit code for a finished navigation request.
    pub fn from_outcome(outcome: &JumpOutcome) -> Self {
        if outcome.moved() {
            ExitCode::Success
        } else {
            ExitCode::NotFound
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, ExitCode::Success)
    }

    pub fn description(&self) -> &str {
        match self {
            ExitCode::Success => "Success",
            ExitCode::GeneralError => "General error",
            ExitCode::NotFound => "Not found",
            ExitCode::IoError => "I/O error",
            ExitCode::ConfigError => "Configuration error",
        }
    }
}
