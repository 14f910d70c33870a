use crate::surface::Snapshot;

/// Pixel snapshots taken before each mutation of the surface.
///
/// `cursor` counts the mutations that can still be reverted: `entries[cursor - 1]`
/// holds the pixels from just before the most recent one. Capturing a new
/// snapshot drops everything at or after the cursor.
#[derive(Debug, Default)]
pub struct SnapshotHistory {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the pixels as they are before a mutation
    pub fn capture(&mut self, snapshot: Snapshot) {
        self.entries.truncate(self.cursor);
        self.entries.push(snapshot);
        self.cursor = self.entries.len();
        log::debug!("History captured, cursor at {}", self.cursor);
    }

    /// Step back one mutation and return the pixels to restore.
    ///
    /// Returns `None` when already at the earliest entry.
    pub fn step_back(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        log::debug!("History stepped back, cursor at {}", self.cursor);
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
