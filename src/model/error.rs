//! Error types for termfolio.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`ContentError`] - Portfolio content file read/parse failures
//!   - [`LoggingError`] - Log directory or subscriber setup failures
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! The viewport tracker itself has no error type: a missing section or an
//! empty registry degrades to a no-op.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// Every variant is fatal: startup errors are reported on stderr before the
/// terminal is taken over, terminal errors after it has been restored.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Portfolio content could not be loaded.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading a portfolio content file.
///
/// A content file is optional. Once one has been named (CLI, environment or
/// config file) it must exist and parse; silently falling back to the
/// built-in content would hide typos in the path.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The named content file does not exist.
    #[error("Content file not found: {path}")]
    FileNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },

    /// The content file exists but could not be read.
    #[error("Failed to read content file at {path}: {source}")]
    Read {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content file is not a valid portfolio document.
    #[error("Invalid content in {path}: {reason}")]
    Parse {
        /// The path with invalid content.
        path: PathBuf,
        /// Parser message (line/column included by toml).
        reason: String,
    },
}
