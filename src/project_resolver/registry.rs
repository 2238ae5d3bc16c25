//! Registry of explicitly configured index files

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Extra index files registered for one project root.
///
/// Configuration files may give either a single path or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagPaths {
    Single(PathBuf),
    Many(Vec<PathBuf>),
}

impl TagPaths {
    pub fn as_slice(&self) -> &[PathBuf] {
        match self {
            Self::Single(path) => std::slice::from_ref(path),
            Self::Many(paths) => paths,
        }
    }

    /// Append a path, widening `Single` into `Many`.
    pub fn push(&mut self, path: PathBuf) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Many(vec![first, path]);
            }
            Self::Many(paths) => paths.push(path),
        }
    }
}

impl From<PathBuf> for TagPaths {
    fn from(path: PathBuf) -> Self {
        Self::Single(path)
    }
}

impl From<Vec<PathBuf>> for TagPaths {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::Many(paths)
    }
}

/// Project-registered and global index files, mutable at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRegistry {
    #[serde(default)]
    projects: HashMap<PathBuf, TagPaths>,
    #[serde(default)]
    global: Vec<PathBuf>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(projects: HashMap<PathBuf, TagPaths>, global: Vec<PathBuf>) -> Self {
        Self { projects, global }
    }

    /// Index files registered for `root`, in registration order.
    pub fn project_paths(&self, root: &Path) -> &[PathBuf] {
        self.projects
            .get(root)
            .map(TagPaths::as_slice)
            .unwrap_or_default()
    }

    /// Index files that apply to every query, in registration order.
    pub fn global_paths(&self) -> &[PathBuf] {
        &self.global
    }

    pub fn projects(&self) -> &HashMap<PathBuf, TagPaths> {
        &self.projects
    }

    /// Replace the index files registered for `root`.
    pub fn set_project(&mut self, root: impl Into<PathBuf>, paths: impl Into<TagPaths>) {
        self.projects.insert(root.into(), paths.into());
    }

    /// Register one more index file for `root`.
    pub fn add_project_path(&mut self, root: impl Into<PathBuf>, path: impl Into<PathBuf>) {
        let path = path.into();
        match self.projects.entry(root.into()) {
            std::collections::hash_map::Entry::Occupied(mut entry) => entry.get_mut().push(path),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(TagPaths::Single(path));
            }
        }
    }

    pub fn remove_project(&mut self, root: &Path) -> Option<TagPaths> {
        self.projects.remove(root)
    }

    /// Register a global index file. Re-adding an existing path keeps its
    /// original position.
    pub fn add_global(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.global.contains(&path) {
            self.global.push(path);
        }
    }

    pub fn remove_global(&mut self, path: &Path) -> bool {
        let before = self.global.len();
        self.global.retain(|existing| existing != path);
        self.global.len() != before
    }
}
