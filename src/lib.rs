/// The main library module for tagjump
pub mod commands;
pub mod config;
pub mod disambiguate;
pub mod display;
pub mod editor;
pub mod error;
pub mod history;
pub mod io;
pub mod navigator;
pub mod project_resolver;
pub mod tags;

// Explicit exports for better API clarity
pub use commands::{Command, CommandRegistry};
pub use config::Settings;
pub use disambiguate::{ChoiceList, ChoicePrompt, ChoiceRow, disambiguate};
pub use editor::Editor;
pub use error::{TagError, TagResult};
pub use history::{JumpHistory, JumpRecord};
pub use navigator::{JumpOutcome, Navigator};
pub use project_resolver::{MarkerRootProvider, ProjectRootProvider, TagPaths, TagRegistry};
pub use tags::{IndexResolver, Locator, Resolution, TagEntry, scan_index};
