//! Caret-location history (undo/redo of caret positions, not content).

/// Default number of snapshots kept before the oldest is dropped
pub const DEFAULT_HISTORY_LIMIT: usize = 1000;

/// Linear undo/redo log of caret snapshots.
///
/// Each snapshot holds one caret index per cursor. `index` is the snapshot
/// last restored, or `len()` when nothing is being restored; storing a
/// snapshot truncates everything from `index` on.
#[derive(Debug, Clone)]
pub struct CaretHistory {
    snapshots: Vec<Vec<usize>>,
    index: usize,
    max_size: usize,
}

impl Default for CaretHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CaretHistory {
    /// Create a new history with default max size
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a new history with specified max size
    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            snapshots: Vec::new(),
            index: 0,
            max_size: max_size.max(1),
        }
    }

    /// Record a snapshot, dropping any redo tail
    pub fn store(&mut self, carets: Vec<usize>) {
        self.snapshots.truncate(self.index);
        self.snapshots.push(carets);

        // Trim if exceeded max size
        if self.snapshots.len() > self.max_size {
            let excess = self.snapshots.len() - self.max_size;
            self.snapshots.drain(..excess);
        }
        self.index = self.snapshots.len();
    }

    /// Step back one snapshot.
    ///
    /// When nothing has been restored yet, `current` is stored first so that
    /// [`CaretHistory::next`] can come back to it.
    pub fn previous(&mut self, current: impl FnOnce() -> Vec<usize>) -> Option<&[usize]> {
        if self.index == self.snapshots.len() {
            self.store(current());
            self.index -= 1;
        }
        if self.index > 0 {
            self.index -= 1;
            Some(&self.snapshots[self.index])
        } else {
            None
        }
    }

    /// Step forward one snapshot
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.index + 1 < self.snapshots.len() {
            self.index += 1;
            Some(&self.snapshots[self.index])
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.index = 0;
    }
}
