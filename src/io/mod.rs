//! Input/Output handling for the CLI.
//!
//! - Unified output formatting (text, JSON)
//! - Exit codes
//! - Terminal host: an editor model and a choice prompt for interactive use

pub mod exit_code;
pub mod format;
pub mod output;
pub mod terminal;

pub use exit_code::ExitCode;
pub use format::{ErrorDetails, JsonResponse, OutputFormat};
pub use output::OutputManager;
pub use terminal::{TerminalEditor, TerminalPrompt, run_session};
