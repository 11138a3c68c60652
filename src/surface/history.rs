//! Back/forward list for surfaces whose widget exposes no history query API.

/// Linear session history with a cursor.
///
/// Traversals (`back`/`forward`) move the cursor immediately and leave a
/// pending marker; the next [`commit`](SessionHistory::commit) then replaces
/// the traversed entry instead of appending, so redirects land in place.
/// A fresh load started before that commit must call
/// [`cancel_traversal`](SessionHistory::cancel_traversal) first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
    traversing: bool,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished load of `url`.
    pub fn commit(&mut self, url: &str) {
        match self.cursor {
            Some(idx) if self.traversing => {
                self.entries[idx] = url.to_string();
            }
            Some(idx) if self.entries[idx] == url => {
                // reload
            }
            Some(idx) => {
                self.entries.truncate(idx + 1);
                self.entries.push(url.to_string());
                self.cursor = Some(idx + 1);
            }
            None => {
                self.entries.push(url.to_string());
                self.cursor = Some(0);
            }
        }
        self.traversing = false;
    }

    /// Drops a pending traversal so the next commit is a new entry that cuts
    /// off everything after the cursor.
    pub fn cancel_traversal(&mut self) {
        self.traversing = false;
    }

    /// Moves one entry back and returns the address to load.
    pub fn back(&mut self) -> Option<&str> {
        let idx = self.cursor.filter(|&i| i > 0)? - 1;
        self.cursor = Some(idx);
        self.traversing = true;
        Some(&self.entries[idx])
    }

    /// Moves one entry forward and returns the address to load.
    pub fn forward(&mut self) -> Option<&str> {
        let idx = self.cursor.filter(|&i| i + 1 < self.entries.len())? + 1;
        self.cursor = Some(idx);
        self.traversing = true;
        Some(&self.entries[idx])
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.entries.len())
    }

    pub fn current(&self) -> Option<&str> {
        self.cursor.map(|i| self.entries[i].as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
