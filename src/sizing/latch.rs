//! Sizing state owned by the box widget.

use super::table::SizingDecision;
use crate::model::FontSize;

/// One-way boolean: once set, it stays set for the life of the value.
///
/// Used for the ellipsis flag. Overflow is sticky: a later pass measuring
/// three rows or fewer leaves it set. Whether that is product intent or an
/// accident of the first implementation is unresolved, so it is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverflowLatch(bool);

impl OverflowLatch {
    /// Set the latch. Returns true if this call flipped it.
    pub fn set(&mut self) -> bool {
        let flipped = !self.0;
        self.0 = true;
        flipped
    }

    /// Whether the latch has been set.
    pub fn is_set(self) -> bool {
        self.0
    }
}

/// Font size and ellipsis flag, written only by the sizing pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizingState {
    font_size: FontSize,
    ellipsis: OverflowLatch,
}

impl SizingState {
    /// Fresh state at `font_size` with no overflow.
    pub fn new(font_size: FontSize) -> Self {
        Self {
            font_size,
            ellipsis: OverflowLatch::default(),
        }
    }

    /// Current font size.
    pub fn font_size(&self) -> FontSize {
        self.font_size
    }

    /// Whether rows should be truncated with an ellipsis.
    pub fn ellipsis(&self) -> bool {
        self.ellipsis.is_set()
    }

    /// Apply a decision. Returns true if the ellipsis flag was newly set.
    pub(crate) fn apply(&mut self, decision: SizingDecision) -> bool {
        self.font_size = decision.font_size;
        decision.overflow && self.ellipsis.set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_reports_first_flip_only() {
        let mut latch = OverflowLatch::default();
        assert!(latch.set());
        assert!(!latch.set());
        assert!(latch.is_set());
    }

    #[test]
    fn non_overflow_decision_does_not_clear_ellipsis() {
        let mut state = SizingState::new(FontSize::DEFAULT);
        state.apply(SizingDecision {
            font_size: FontSize::DEFAULT,
            overflow: true,
        });
        state.apply(SizingDecision {
            font_size: FontSize::ONE_ROW,
            overflow: false,
        });
        assert!(state.ellipsis());
        assert_eq!(state.font_size(), FontSize::ONE_ROW);
    }
}
