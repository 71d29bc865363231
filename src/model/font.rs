//! Font size and row count newtypes.

use std::fmt;

/// Font size in CSS-style pixels.
///
/// Written only by the sizing pass; everything else reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    /// Size used before any measurement has happened.
    pub const DEFAULT: FontSize = FontSize(16);
    /// Size for content that fits on a single line.
    pub const ONE_ROW: FontSize = FontSize(18);
    /// Size for content spanning two lines.
    pub const TWO_ROWS: FontSize = FontSize(16);
    /// Size for content spanning three lines, also the fallback size.
    pub const THREE_ROWS: FontSize = FontSize(14);

    /// Smart constructor: rejects zero, which would collapse the layout.
    pub fn new(px: u16) -> Option<Self> {
        (px > 0).then_some(Self(px))
    }

    /// Size in pixels.
    pub fn px(self) -> u16 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimated number of wrapped text lines across all rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RowCount(usize);

impl RowCount {
    /// No rows.
    pub const ZERO: RowCount = RowCount(0);

    /// Wrap a raw count.
    pub fn new(count: usize) -> Self {
        Self(count)
    }

    /// The raw count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl std::ops::Add for RowCount {
    type Output = RowCount;

    fn add(self, rhs: RowCount) -> RowCount {
        RowCount(self.0.saturating_add(rhs.0))
    }
}

impl std::iter::Sum for RowCount {
    fn sum<I: Iterator<Item = RowCount>>(iter: I) -> RowCount {
        iter.fold(RowCount::ZERO, |acc, r| acc + r)
    }
}

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
