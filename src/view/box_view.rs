//! Box widget rendering.
//!
//! Draws the font size and ellipsis readouts, then the bordered container
//! with every row wrapped at the column count the layout surface produced.

use super::constants::{ELLIPSIS, HEADER_HEIGHT, STATUS_BAR_HEIGHT};
use super::styles::BoxStyles;
use crate::sizing::OVERFLOW_THRESHOLD;
use crate::state::BoxWidget;
use crate::surface::{CellSurface, RowSet};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};
use tracing::warn;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Status bar key hints.
const KEY_HINTS: &str = "a: add entry  d: remove entry  q: quit";

/// Render-ready snapshot of the box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FitBoxView {
    font_px: u16,
    ellipsis: bool,
    columns: usize,
    lines: Vec<String>,
    styles: BoxStyles,
}

impl FitBoxView {
    /// Snapshot the widget state and the rows as laid out on `surface`.
    pub fn new(widget: &BoxWidget, surface: &CellSurface, rows: &RowSet) -> Self {
        let lines = rows
            .iter()
            .flat_map(|row| {
                surface.lines_of(row).unwrap_or_else(|err| {
                    warn!(%row, error = %err, "Row missing from surface, drawing nothing");
                    Vec::new()
                })
            })
            .collect();
        Self {
            font_px: widget.font_size().px(),
            ellipsis: widget.ellipsis(),
            columns: surface.columns(),
            lines,
            styles: BoxStyles::default(),
        }
    }

    /// Use custom styles.
    pub fn with_styles(mut self, styles: BoxStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Lines that end up inside the box.
    ///
    /// With ellipsis on, at most [`OVERFLOW_THRESHOLD`] lines are shown and a
    /// cut is marked on the last one.
    pub fn visible_lines(&self) -> Vec<String> {
        if !self.ellipsis || self.lines.len() <= OVERFLOW_THRESHOLD {
            return self.lines.clone();
        }
        let mut shown: Vec<String> = self.lines[..OVERFLOW_THRESHOLD].to_vec();
        if let Some(last) = shown.last_mut() {
            *last = with_ellipsis(last, self.columns);
        }
        shown
    }
}

/// Truncate `line` so that it plus the ellipsis marker fits in `columns`.
fn with_ellipsis(line: &str, columns: usize) -> String {
    let budget = columns.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut width = 0;
    for ch in line.trim_end().chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str(ELLIPSIS);
    out
}

impl Widget for FitBoxView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header_area, body_area, status_area] = split(area);

        let header = vec![
            Line::from(vec![
                Span::styled("Current font size ", self.styles.label),
                Span::styled(self.font_px.to_string(), self.styles.value),
            ]),
            Line::from(vec![
                Span::styled("should have ellipsis ", self.styles.label),
                Span::styled(self.ellipsis.to_string(), self.styles.value),
            ]),
        ];
        Paragraph::new(header).render(header_area, buf);

        let lines = self.visible_lines();
        let inner_width = u16::try_from(self.columns).unwrap_or(u16::MAX);
        let inner_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let box_area = Rect {
            x: body_area.x,
            y: body_area.y,
            width: inner_width.saturating_add(2).min(body_area.width),
            height: inner_height.saturating_add(2).min(body_area.height),
        };
        let block = Block::bordered().border_style(self.styles.border);
        let body: Vec<Line> = lines
            .into_iter()
            .map(|l| Line::styled(l, self.styles.row))
            .collect();
        Paragraph::new(body).block(block).render(box_area, buf);

        Paragraph::new(Line::styled(KEY_HINTS, self.styles.status)).render(status_area, buf);
    }
}

fn split(area: Rect) -> [Rect; 3] {
    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_BAR_HEIGHT),
    ])
    .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
#[path = "box_view_tests.rs"]
mod tests;
