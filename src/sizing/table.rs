//! Row count to font size mapping.

use crate::model::{FontSize, RowCount};

/// Row count above which text is truncated with an ellipsis instead of shrunk.
pub const OVERFLOW_THRESHOLD: usize = 3;

/// What one sizing pass decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingDecision {
    /// Font size to apply.
    pub font_size: FontSize,
    /// Whether the row count exceeded [`OVERFLOW_THRESHOLD`].
    pub overflow: bool,
}

/// Map a measured row count to a font size.
///
/// | rows | font size | overflow |
/// |------|-----------|----------|
/// | 1    | 18        | no       |
/// | 2    | 16        | no       |
/// | 3    | 14        | no       |
/// | > 3  | `current` | yes      |
/// | 0    | 14        | no       |
///
/// Overflow keeps the current size rather than shrinking further.
pub fn font_size_for_row_count(rows: RowCount, current: FontSize) -> SizingDecision {
    if rows.get() > OVERFLOW_THRESHOLD {
        return SizingDecision {
            font_size: current,
            overflow: true,
        };
    }
    let font_size = match rows.get() {
        1 => FontSize::ONE_ROW,
        2 => FontSize::TWO_ROWS,
        3 => FontSize::THREE_ROWS,
        _ => FontSize::THREE_ROWS,
    };
    SizingDecision {
        font_size,
        overflow: false,
    }
}
