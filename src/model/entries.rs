//! The ordered list of labels rendered by the box.

/// Raw example data the box shows when nothing else is configured.
///
/// Split on `,` without trimming, so later entries keep their leading space.
pub const EXAMPLE_ENTRIES: &str = "ID 000 000011, ID 0001 111111, ID 0001111";

/// Ordered list of entry labels. Each entry renders as one logical row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryList(Vec<String>);

impl EntryList {
    /// Build from any sequence of labels.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(entries.into_iter().map(Into::into).collect())
    }

    /// The built-in example data.
    pub fn example() -> Self {
        Self::new(EXAMPLE_ENTRIES.split(','))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entry labels in order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.0.push(entry.into());
    }

    /// Remove the entry at `index`, if present.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.0.len()).then(|| self.0.remove(index))
    }

    /// Remove the last entry.
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }
}

impl From<Vec<String>> for EntryList {
    fn from(entries: Vec<String>) -> Self {
        Self(entries)
    }
}
