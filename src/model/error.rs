//! Top-level error type for the fitbox application.
//!
//! Sizing failures never reach this type: a sizing pass that cannot measure
//! logs and leaves the widget untouched. Only startup and terminal failures
//! are fatal and propagate to `main`.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use thiserror::Error;

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal IO failed.
    #[error("Terminal IO error: {0}")]
    Io(#[from] std::io::Error),
}
