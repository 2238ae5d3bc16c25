//! Project root discovery

use std::path::{Path, PathBuf};

use super::memo::RootMemo;

/// Host collaborator that knows which project a file belongs to.
pub trait ProjectRootProvider: Send + Sync {
    /// Root directory of the project containing `path`, if any.
    ///
    /// `path` may name a file or a directory.
    fn project_root(&self, path: &Path) -> Option<PathBuf>;
}

/// Finds the nearest ancestor directory holding one of a set of marker entries
/// (`.git`, `.hg`, ...).
pub struct MarkerRootProvider {
    markers: Vec<String>,
    memo: RootMemo,
}

impl MarkerRootProvider {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
            memo: RootMemo::new(),
        }
    }

    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Drop memoized lookups, e.g. after a project was created or removed.
    pub fn clear_cache(&self) {
        self.memo.clear();
    }

    fn search(&self, start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .find(|dir| self.markers.iter().any(|marker| dir.join(marker).exists()))
            .map(Path::to_path_buf)
    }
}

impl ProjectRootProvider for MarkerRootProvider {
    fn project_root(&self, path: &Path) -> Option<PathBuf> {
        let start = if path.is_dir() {
            path.to_path_buf()
        } else {
            path.parent()?.to_path_buf()
        };
        let start = std::path::absolute(&start).unwrap_or(start);

        if let Some(cached) = self.memo.get(&start) {
            return cached;
        }
        let root = self.search(&start);
        self.memo.insert(start, root.clone());
        root
    }
}
