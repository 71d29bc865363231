//! Domain model types (pure).

pub mod entries;
pub mod error;
pub mod font;
pub mod key_action;

pub use entries::{EntryList, EXAMPLE_ENTRIES};
pub use error::AppError;
pub use font::{FontSize, RowCount};
pub use key_action::KeyAction;
