//! Property-based tests for the sizing table, the overflow latch and wrapping.
//!
//! Invariants:
//! 1. Row counts 0..=3 map to the fixed table and never set ellipsis
//! 2. Row counts above 3 keep the current font size and set ellipsis
//! 3. Once set, ellipsis survives any sequence of later passes
//! 4. Wrapped lines never exceed the column budget
//! 5. Wrapping keeps every non-space character in order

use fitbox::model::{EntryList, FontSize, RowCount};
use fitbox::sizing::{font_size_for_row_count, run_sizing_pass, SizingState, OVERFLOW_THRESHOLD};
use fitbox::surface::{wrap_text, CellSurface, LayoutSurface, Viewport};
use proptest::prelude::*;
use unicode_width::UnicodeWidthStr;

fn font_size() -> impl Strategy<Value = FontSize> {
    (1u16..64).prop_filter_map("non-zero", FontSize::new)
}

proptest! {
    #[test]
    fn small_row_counts_follow_table(rows in 0usize..=3, current in font_size()) {
        let decision = font_size_for_row_count(RowCount::new(rows), current);
        let expected = match rows {
            1 => 18,
            2 => 16,
            _ => 14,
        };
        prop_assert_eq!(decision.font_size.px(), expected);
        prop_assert!(!decision.overflow);
    }

    #[test]
    fn overflow_keeps_current_size(rows in (OVERFLOW_THRESHOLD + 1)..10_000, current in font_size()) {
        let decision = font_size_for_row_count(RowCount::new(rows), current);
        prop_assert_eq!(decision.font_size, current);
        prop_assert!(decision.overflow);
    }

    #[test]
    fn ellipsis_is_sticky_across_passes(
        overflow_lines in 4usize..12,
        later in prop::collection::vec(1usize..4, 1..6),
    ) {
        let viewport = Viewport::new(80, 30);
        let mut state = SizingState::new(FontSize::DEFAULT);

        let many = EntryList::new((0..overflow_lines).map(|i| format!("row {i}")));
        let (mut surface, rows) = CellSurface::mount(&many, state.font_size(), viewport, 0);
        run_sizing_pass(&mut state, &mut surface, &rows);
        prop_assert!(state.ellipsis());

        for (generation, count) in later.into_iter().enumerate() {
            let few = EntryList::new((0..count).map(|i| format!("r{i}")));
            let (mut surface, rows) =
                CellSurface::mount(&few, state.font_size(), viewport, generation as u64 + 1);
            run_sizing_pass(&mut state, &mut surface, &rows);
            prop_assert!(state.ellipsis());
        }
    }

    #[test]
    fn wrapped_lines_fit_columns(text in "[a-z ]{0,200}", columns in 1usize..60) {
        for line in wrap_text(&text, columns) {
            prop_assert!(line.width() <= columns, "{:?} wider than {}", line, columns);
        }
    }

    #[test]
    fn wrapping_keeps_visible_characters(text in "[a-z ]{0,200}", columns in 1usize..60) {
        let original: String = text.chars().filter(|c| *c != ' ').collect();
        let wrapped: String = wrap_text(&text, columns)
            .concat()
            .chars()
            .filter(|c| *c != ' ')
            .collect();
        prop_assert_eq!(original, wrapped);
    }

    #[test]
    fn sizing_pass_never_leaks_nodes(
        entries in prop::collection::vec("[a-z ]{0,40}", 0..8),
        cols in 10u16..200,
    ) {
        let entries = EntryList::new(entries);
        let (mut surface, rows) =
            CellSurface::mount(&entries, FontSize::DEFAULT, Viewport::new(cols, 30), 0);
        let before = surface.node_count();
        let mut state = SizingState::new(FontSize::DEFAULT);

        run_sizing_pass(&mut state, &mut surface, &rows);

        prop_assert_eq!(surface.node_count(), before);
    }
}
