//! Jump history: a linear back/forward log of visited positions.
//!
//! `pos` counts how many records are "behind" the user. `0` means before the
//! first record, `len` means at the newest one. Pushing while `pos < len`
//! discards the abandoned future before appending.

use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_CAPACITY: usize = 500;

/// A file and an opaque cursor offset within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JumpRecord {
    pub location: PathBuf,
    pub position: usize,
}

impl JumpRecord {
    pub fn new(location: impl Into<PathBuf>, position: usize) -> Self {
        Self {
            location: location.into(),
            position,
        }
    }

    fn is_at(&self, location: &Path, position: usize) -> bool {
        self.position == position && self.location == location
    }
}

#[derive(Debug, Clone)]
pub struct JumpHistory {
    records: Vec<JumpRecord>,
    pos: usize,
    capacity: usize,
}

impl Default for JumpHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// History that keeps at most `capacity` records, evicting the oldest.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            pos: 0,
            capacity: capacity.max(2),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cursor into the history, always within `0..=len`.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn records(&self) -> &[JumpRecord] {
        &self.records
    }

    /// Record the cursor currently points at.
    pub fn current(&self) -> Option<&JumpRecord> {
        self.pos.checked_sub(1).and_then(|idx| self.records.get(idx))
    }

    /// Append a record unless it duplicates the one at the cursor.
    ///
    /// Returns `true` when a record was stored.
    pub fn record_if_changed(&mut self, location: impl Into<PathBuf>, position: usize) -> bool {
        let location = location.into();
        if self
            .current()
            .is_some_and(|record| record.is_at(&location, position))
        {
            return false;
        }

        self.records.truncate(self.pos);
        self.records.push(JumpRecord { location, position });
        if self.records.len() > self.capacity {
            let excess = self.records.len() - self.capacity;
            self.records.drain(..excess);
        }
        self.pos = self.records.len();
        true
    }

    /// Commit a new jump point, discarding every record after the cursor.
    pub fn push(&mut self, location: impl Into<PathBuf>, position: usize) -> bool {
        self.records.truncate(self.pos);
        self.record_if_changed(location, position)
    }

    /// Move one record back. No-op at `pos <= 1`.
    pub fn step_back(&mut self) -> Option<&JumpRecord> {
        if self.pos <= 1 {
            return None;
        }
        self.pos -= 1;
        self.current()
    }

    /// Move one record forward. No-op at `pos == len`.
    pub fn step_forward(&mut self) -> Option<&JumpRecord> {
        if self.pos >= self.records.len() {
            return None;
        }
        self.pos += 1;
        self.current()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.pos = 0;
    }
}
