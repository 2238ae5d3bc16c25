use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Thread-safe memo of project-root lookups keyed by the directory they started from.
///
/// A `None` value records that no root was found, so misses are cached too.
pub struct RootMemo {
    inner: RwLock<HashMap<PathBuf, Option<PathBuf>>>,
}

impl Default for RootMemo {
    fn default() -> Self {
        Self::new()
    }
}

impl RootMemo {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, dir: PathBuf, root: Option<PathBuf>) {
        let mut map = self.inner.write();
        map.insert(dir, root);
    }

    pub fn get(&self, dir: &Path) -> Option<Option<PathBuf>> {
        let map = self.inner.read();
        map.get(dir).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        let mut map = self.inner.write();
        map.clear();
    }
}
