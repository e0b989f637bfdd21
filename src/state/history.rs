//! Bounded linear undo/redo log

/// Maximum number of snapshots retained
pub const HISTORY_LIMIT: usize = 50;

/// Linear snapshot log with a cursor
///
/// Pushing while the cursor is behind the end discards the entries after it.
/// Once the log holds `limit` entries, each push evicts the oldest one.
#[derive(Debug, Clone)]
pub struct History<T> {
    entries: Vec<T>,
    position: usize,
    limit: usize,
}

impl<T: Clone> History<T> {
    pub fn new() -> Self {
        Self::with_limit(HISTORY_LIMIT)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            position: 0,
            limit: limit.max(1),
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = 0;
    }

    /// Replace the log with a single entry at position 0
    pub fn reset(&mut self, snapshot: T) {
        self.entries.clear();
        self.entries.push(snapshot);
        self.position = 0;
    }

    /// Append a snapshot after the cursor, truncating any redo branch
    pub fn push(&mut self, snapshot: T) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.position + 1);
        }
        self.entries.push(snapshot);
        if self.entries.len() > self.limit {
            let excess = self.entries.len() - self.limit;
            self.entries.drain(..excess);
        }
        self.position = (self.entries.len() - 1).min(self.limit - 1);
    }

    /// Step back and return the snapshot now under the cursor
    pub fn undo(&mut self) -> Option<&T> {
        if !self.can_undo() {
            return None;
        }
        self.position -= 1;
        self.entries.get(self.position)
    }

    /// Step forward and return the snapshot now under the cursor
    pub fn redo(&mut self) -> Option<&T> {
        if !self.can_redo() {
            return None;
        }
        self.position += 1;
        self.entries.get(self.position)
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&T> {
        self.entries.get(self.position)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position, None when the log is empty
    pub fn position(&self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.position)
        }
    }
}

impl<T: Clone> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}
