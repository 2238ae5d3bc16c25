//! Index discovery across scopes.
//!
//! Candidate index files are read in a fixed order:
//! 1. directory scope: the `tags` file beside the current file (or in the cwd)
//! 2. project scope: `<project root>/tags`
//! 3. project-registered files for that root
//! 4. global files
//!
//! Results are concatenated in that order without re-ranking.

use super::TagEntry;
use super::reader::scan_index;
use crate::error::TagError;
use crate::project_resolver::{ProjectRootProvider, TagRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_INDEX_NAME: &str = "tags";

/// Outcome of resolving one query against every index source.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Matches in discovery order
    pub entries: Vec<TagEntry>,
    /// Index files that exist but could not be read
    pub failures: Vec<TagError>,
}

impl Resolution {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct IndexResolver {
    registry: TagRegistry,
    roots: Arc<dyn ProjectRootProvider>,
    index_name: String,
}

impl IndexResolver {
    pub fn new(registry: TagRegistry, roots: Arc<dyn ProjectRootProvider>) -> Self {
        Self {
            registry,
            roots,
            index_name: DEFAULT_INDEX_NAME.to_string(),
        }
    }

    /// Use a different file name for directory and project scope indexes.
    pub fn with_index_name(mut self, name: impl Into<String>) -> Self {
        self.index_name = name.into();
        self
    }

    pub fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TagRegistry {
        &mut self.registry
    }

    /// Ordered, de-duplicated index files that apply to `current_file`.
    ///
    /// Files are listed whether or not they exist.
    pub fn candidate_files(&self, current_file: Option<&Path>) -> Vec<PathBuf> {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut candidates = Vec::new();

        let dir = current_file
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.clone());
        push_unique(&mut candidates, dir.join(&self.index_name));

        let anchor = current_file.unwrap_or(cwd.as_path());
        if let Some(root) = self.roots.project_root(anchor) {
            push_unique(&mut candidates, root.join(&self.index_name));
            for path in self.registry.project_paths(&root) {
                push_unique(&mut candidates, path.clone());
            }
        }

        for path in self.registry.global_paths() {
            push_unique(&mut candidates, path.clone());
        }

        candidates
    }

    /// Find every entry whose tag starts with `query`.
    ///
    /// Missing index files are skipped. Unreadable ones are collected in
    /// [`Resolution::failures`] and do not stop the remaining sources.
    pub fn resolve(&self, current_file: Option<&Path>, query: &str) -> Resolution {
        let mut resolution = Resolution::default();

        for index in self.candidate_files(current_file) {
            if !index.is_file() {
                debug!("no index at '{}'", index.display());
                continue;
            }
            match scan_index(&index, query, &mut resolution.entries) {
                Ok(found) => debug!("'{}' matched {} in '{}'", query, found, index.display()),
                Err(e) => {
                    warn!("{e}");
                    resolution.failures.push(e);
                }
            }
        }

        resolution
    }
}

fn push_unique(candidates: &mut Vec<PathBuf>, path: PathBuf) {
    if !candidates.contains(&path) {
        candidates.push(path);
    }
}
