//! Widget state (pure).
//!
//! State transitions are driven by render commits and entry edits; nothing
//! here touches the terminal.

pub mod box_widget;
pub mod entry_pool;

pub use box_widget::{BoxWidget, Lifecycle};
pub use entry_pool::EntryPool;
