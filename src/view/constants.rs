//! Layout dimension constants for TUI rendering.

/// Height of the font size / ellipsis readout, including a spacer line.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Marker drawn where overflowing rows are cut.
pub const ELLIPSIS: &str = "…";

/// Terminal width assumed by headless `--report` runs.
pub const REPORT_COLUMNS: u16 = 80;

/// Terminal height assumed by headless `--report` runs.
pub const REPORT_ROWS: u16 = 24;
