//! Row measurement and the font sizing pass.
//!
//! A pass measures one unwrapped line using the first row as a sample,
//! divides every row's height by it (rounding up) to estimate wrapped lines,
//! and maps the total through [`font_size_for_row_count`].

pub mod latch;
pub mod table;

pub use latch::{OverflowLatch, SizingState};
pub use table::{font_size_for_row_count, SizingDecision, OVERFLOW_THRESHOLD};

use crate::model::{FontSize, RowCount};
use crate::surface::{LayoutSurface, ProbeGuard, RowSet, SurfaceError};
use thiserror::Error;
use tracing::{debug, info};

/// Reasons a sizing pass could not measure. None of these are faults: the
/// pass is skipped and the previous state stays in place.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SizingError {
    /// Nothing rendered, so there is no row to sample line height from.
    #[error("No rendered rows to sample")]
    NoRows,

    /// The sample line measured as zero or non-finite height.
    #[error("Degenerate single-line height: {0}")]
    DegenerateLineHeight(f64),

    /// The surface rejected a handle, usually a row from a stale render.
    #[error("Layout surface error: {0}")]
    Surface(#[from] SurfaceError),
}

/// Result of [`run_sizing_pass`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingOutcome {
    /// The state was updated from a fresh measurement.
    Applied {
        /// Estimated wrapped lines across all rows.
        row_count: RowCount,
        /// Font size after the pass.
        font_size: FontSize,
        /// Ellipsis flag after the pass.
        ellipsis: bool,
    },
    /// Measurement failed and the state was left alone.
    Skipped(SizingError),
}

/// Height of one unwrapped line of the first row's text.
///
/// A hidden, non-wrapping probe holding the sample's text is attached under the
/// sample row so it inherits the row's font, measured, and removed again.
pub fn single_line_height<S>(surface: &mut S, rows: &RowSet) -> Result<f64, SizingError>
where
    S: LayoutSurface + ?Sized,
{
    let sample = rows.first().ok_or(SizingError::NoRows)?;
    let text = surface.text_content(sample)?;
    let height = {
        let probe = ProbeGuard::attach(surface, sample, &text)?;
        probe.height()?
    };
    if !height.is_finite() || height <= 0.0 {
        return Err(SizingError::DegenerateLineHeight(height));
    }
    Ok(height)
}

/// Sum over rows of `ceil(row_height / single_line_height)`.
pub fn count_rows<S>(surface: &mut S, rows: &RowSet) -> Result<RowCount, SizingError>
where
    S: LayoutSurface + ?Sized,
{
    let line_height = single_line_height(surface, rows)?;
    rows.iter()
        .map(|row| -> Result<RowCount, SizingError> {
            let height = surface.offset_height(row)?;
            Ok(RowCount::new((height / line_height).ceil() as usize))
        })
        .sum()
}

/// Measure `rows` and update `state`.
///
/// Must only be called after `rows` have been laid out on `surface`.
pub fn run_sizing_pass<S>(state: &mut SizingState, surface: &mut S, rows: &RowSet) -> SizingOutcome
where
    S: LayoutSurface + ?Sized,
{
    let row_count = match count_rows(surface, rows) {
        Ok(count) => count,
        Err(err) => {
            debug!(generation = rows.generation(), error = %err, "Sizing pass skipped");
            return SizingOutcome::Skipped(err);
        }
    };

    let decision = font_size_for_row_count(row_count, state.font_size());
    if state.apply(decision) {
        info!(%row_count, "Row count over threshold, ellipsis enabled");
    }
    debug!(
        generation = rows.generation(),
        %row_count,
        font_px = state.font_size().px(),
        ellipsis = state.ellipsis(),
        "Sizing pass applied"
    );

    SizingOutcome::Applied {
        row_count,
        font_size: state.font_size(),
        ellipsis: state.ellipsis(),
    }
}

#[cfg(test)]
#[path = "sizing_tests.rs"]
mod tests;
