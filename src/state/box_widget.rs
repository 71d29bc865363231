//! The box widget: entries plus the sizing state derived from their layout.
//!
//! The widget reacts to render commits. The host renders the entries, then
//! hands the resulting row handles to [`BoxWidget::after_first_render`] once
//! and to [`BoxWidget::on_rows_committed`] on every later commit. A sizing pass
//! runs whenever the committed row set differs from the last one measured.

use crate::model::{EntryList, FontSize};
use crate::sizing::{run_sizing_pass, SizingOutcome, SizingState};
use crate::surface::{LayoutSurface, RowSet};
use tracing::{debug, warn};

/// Mount lifecycle of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Not rendered yet. Commits are ignored.
    Pending,
    /// First render seen, listening for row-set changes.
    Subscribed,
}

/// Box widget state.
#[derive(Debug, Clone)]
pub struct BoxWidget {
    entries: EntryList,
    sizing: SizingState,
    lifecycle: Lifecycle,
    /// Bumped on every entry list change; stamps the next render's rows.
    generation: u64,
    /// Generation of the last row set a pass ran against.
    measured_generation: Option<u64>,
}

impl BoxWidget {
    /// New widget showing `entries` at `font_size` until the first measurement.
    pub fn new(entries: EntryList, font_size: FontSize) -> Self {
        Self {
            entries,
            sizing: SizingState::new(font_size),
            lifecycle: Lifecycle::Pending,
            generation: 0,
            measured_generation: None,
        }
    }

    /// Entries in render order.
    pub fn entries(&self) -> &EntryList {
        &self.entries
    }

    /// Font size the rows should be rendered with.
    pub fn font_size(&self) -> FontSize {
        self.sizing.font_size()
    }

    /// Whether overflowing rows should be truncated with an ellipsis.
    pub fn ellipsis(&self) -> bool {
        self.sizing.ellipsis()
    }

    /// Current mount lifecycle.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// True once the first render has been seen.
    pub fn is_subscribed(&self) -> bool {
        self.lifecycle == Lifecycle::Subscribed
    }

    /// Generation the host must stamp on rows rendered from the current entries.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handle the first render commit: subscribe to later row-set changes and
    /// size from the initial rows straight away.
    pub fn after_first_render<S>(&mut self, surface: &mut S, rows: &RowSet) -> Option<SizingOutcome>
    where
        S: LayoutSurface + ?Sized,
    {
        if self.is_subscribed() {
            warn!("after_first_render called twice; ignoring");
            return None;
        }
        self.lifecycle = Lifecycle::Subscribed;
        debug!(rows = rows.len(), "Box widget subscribed to row changes");
        Some(self.size_from(surface, rows))
    }

    /// Handle a later render commit.
    ///
    /// Runs a sizing pass only when subscribed and when `rows` come from an
    /// entry list that has not been measured yet.
    pub fn on_rows_committed<S>(&mut self, surface: &mut S, rows: &RowSet) -> Option<SizingOutcome>
    where
        S: LayoutSurface + ?Sized,
    {
        if !self.is_subscribed() || self.measured_generation == Some(rows.generation()) {
            return None;
        }
        Some(self.size_from(surface, rows))
    }

    /// Append an entry. The next commit re-measures.
    pub fn push_entry(&mut self, entry: impl Into<String>) {
        self.entries.push(entry);
        self.bump_generation();
    }

    /// Remove the entry at `index`. Returns it if it existed.
    pub fn remove_entry(&mut self, index: usize) -> Option<String> {
        let removed = self.entries.remove(index);
        if removed.is_some() {
            self.bump_generation();
        }
        removed
    }

    /// Remove the last entry. Returns it if the list was not empty.
    pub fn pop_entry(&mut self) -> Option<String> {
        let removed = self.entries.pop();
        if removed.is_some() {
            self.bump_generation();
        }
        removed
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn size_from<S>(&mut self, surface: &mut S, rows: &RowSet) -> SizingOutcome
    where
        S: LayoutSurface + ?Sized,
    {
        // A skipped pass still counts as handled: the same rows would skip again.
        self.measured_generation = Some(rows.generation());
        run_sizing_pass(&mut self.sizing, surface, rows)
    }
}

#[cfg(test)]
#[path = "box_widget_tests.rs"]
mod tests;
