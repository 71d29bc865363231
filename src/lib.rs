//! fitbox
//!
//! A terminal box widget that renders a list of labels and picks a font size
//! from how many wrapped lines they occupy, falling back to ellipsis
//! truncation once the content overflows.
//!
//! Pure core (`model`, `sizing`, `state`, `surface`) and impure shell
//! (`view`, `logging`, `config` loading).

pub mod config;
pub mod logging;
pub mod model;
pub mod sizing;
pub mod state;
pub mod surface;
pub mod view;
