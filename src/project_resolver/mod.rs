//! Project-level configuration for tag resolution
//!
//! Answers two questions for the index resolver:
//! - provider: "Which project root contains this file?"
//! - registry: "Which extra index files are registered for that root, and which apply everywhere?"

pub mod memo;
pub mod provider;
pub mod registry;

pub use memo::RootMemo;
pub use provider::{MarkerRootProvider, ProjectRootProvider};
pub use registry::{TagPaths, TagRegistry};
