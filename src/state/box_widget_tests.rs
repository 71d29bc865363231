//! Tests for the box widget lifecycle against the cell surface.

use super::*;
use crate::sizing::SizingError;
use crate::surface::{CellSurface, Viewport};

const VIEWPORT: Viewport = Viewport {
    cols: 80,
    width_percent: 30,
};

/// Render the widget's current entries the way the view does.
fn render(widget: &BoxWidget) -> (CellSurface, RowSet) {
    CellSurface::mount(
        widget.entries(),
        widget.font_size(),
        VIEWPORT,
        widget.generation(),
    )
}

fn mounted_example() -> BoxWidget {
    let mut widget = BoxWidget::new(EntryList::example(), FontSize::DEFAULT);
    let (mut surface, rows) = render(&widget);
    widget.after_first_render(&mut surface, &rows);
    widget
}

#[test]
fn commits_before_first_render_are_ignored() {
    let mut widget = BoxWidget::new(EntryList::example(), FontSize::DEFAULT);
    let (mut surface, rows) = render(&widget);

    assert_eq!(widget.on_rows_committed(&mut surface, &rows), None);
    assert_eq!(widget.lifecycle(), Lifecycle::Pending);
    assert_eq!(widget.font_size(), FontSize::DEFAULT);
}

#[test]
fn first_render_subscribes_and_sizes() {
    let widget = mounted_example();

    assert!(widget.is_subscribed());
    assert_eq!(widget.font_size(), FontSize::THREE_ROWS);
    assert!(!widget.ellipsis());
}

#[test]
fn second_first_render_is_ignored() {
    let mut widget = mounted_example();
    let (mut surface, rows) = render(&widget);

    assert_eq!(widget.after_first_render(&mut surface, &rows), None);
}

#[test]
fn repaint_of_same_rows_does_not_resize() {
    let mut widget = mounted_example();
    let (mut surface, rows) = render(&widget);

    assert_eq!(widget.on_rows_committed(&mut surface, &rows), None);
}

#[test]
fn added_entry_triggers_pass_and_overflow() {
    let mut widget = mounted_example();
    widget.push_entry("a much longer entry that wraps around");
    let (mut surface, rows) = render(&widget);

    let outcome = widget.on_rows_committed(&mut surface, &rows);

    assert!(matches!(
        outcome,
        Some(SizingOutcome::Applied { ellipsis: true, .. })
    ));
    assert!(widget.ellipsis());
    assert_eq!(widget.font_size(), FontSize::THREE_ROWS);
}

#[test]
fn removing_entries_after_overflow_keeps_ellipsis() {
    let mut widget = mounted_example();
    widget.push_entry("a much longer entry that wraps around");
    let (mut surface, rows) = render(&widget);
    widget.on_rows_committed(&mut surface, &rows);

    widget.pop_entry();
    widget.pop_entry();
    let (mut surface, rows) = render(&widget);
    widget.on_rows_committed(&mut surface, &rows);

    assert_eq!(widget.entries().len(), 2);
    assert_eq!(widget.font_size(), FontSize::TWO_ROWS);
    assert!(widget.ellipsis());
}

#[test]
fn empty_list_skips_without_changing_state() {
    let mut widget = BoxWidget::new(EntryList::default(), FontSize::DEFAULT);
    let (mut surface, rows) = render(&widget);

    let outcome = widget.after_first_render(&mut surface, &rows);

    assert_eq!(outcome, Some(SizingOutcome::Skipped(SizingError::NoRows)));
    assert!(widget.is_subscribed());
    assert_eq!(widget.font_size(), FontSize::DEFAULT);
    assert!(!widget.ellipsis());
}

#[test]
fn emptying_the_list_keeps_last_measurement() {
    let mut widget = BoxWidget::new(EntryList::new(["only"]), FontSize::DEFAULT);
    let (mut surface, rows) = render(&widget);
    widget.after_first_render(&mut surface, &rows);
    assert_eq!(widget.font_size(), FontSize::ONE_ROW);

    widget.pop_entry();
    let (mut surface, rows) = render(&widget);
    let outcome = widget.on_rows_committed(&mut surface, &rows);

    assert_eq!(outcome, Some(SizingOutcome::Skipped(SizingError::NoRows)));
    assert_eq!(widget.font_size(), FontSize::ONE_ROW);
}

#[test]
fn removing_missing_index_keeps_generation() {
    let mut widget = mounted_example();
    let before = widget.generation();

    assert_eq!(widget.remove_entry(10), None);
    assert_eq!(widget.generation(), before);

    assert_eq!(widget.remove_entry(0), Some("ID 000 000011".to_string()));
    assert_eq!(widget.generation(), before + 1);
}

#[test]
fn sizing_leaves_no_probe_on_surface() {
    let mut widget = BoxWidget::new(EntryList::example(), FontSize::DEFAULT);
    let (mut surface, rows) = render(&widget);
    let before = surface.node_count();

    widget.after_first_render(&mut surface, &rows);

    assert_eq!(surface.node_count(), before);
    for row in rows.iter() {
        assert_eq!(surface.offset_height(row).unwrap(), surface.line_height());
    }
}
