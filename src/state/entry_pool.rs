//! Source of labels for entries appended at runtime.

use crate::model::EntryList;

/// Cycles through a fixed list of labels.
#[derive(Debug, Clone)]
pub struct EntryPool {
    labels: EntryList,
    next: usize,
}

impl EntryPool {
    /// Pool cycling `labels`; an empty list falls back to the example data.
    pub fn new(labels: EntryList) -> Self {
        let labels = if labels.is_empty() {
            EntryList::example()
        } else {
            labels
        };
        Self { labels, next: 0 }
    }

    /// Next label, wrapping around at the end.
    pub fn next_label(&mut self) -> String {
        let slice = self.labels.as_slice();
        let label = slice[self.next % slice.len()].clone();
        self.next = (self.next + 1) % slice.len();
        label
    }
}
