//! Error types for the guidemate application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions up to [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`ContentError`] - Content pack read/parse/validation failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`NavigationError`] - Requests for screens the catalog does not have
//!   - `std::io::Error` - Terminal/TUI rendering failures
//!
//! # Recovery Strategy
//!
//! The section search navigator itself has no failure modes: an empty query, a
//! query with no matches, and cycling through fewer than two matches are all
//! normal states. Everything here happens at startup or in the terminal layer
//! and is fatal: report and exit.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::{ScreenId, SectionKey};
use crate::state::NavigationError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Content pack could not be loaded or failed validation.
    #[error("Content error: {0}")]
    Content(#[from] ContentError),

    /// Log file or subscriber could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Requested start screen does not exist.
    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    /// Terminal or TUI rendering error.
    ///
    /// Without a working terminal the reader cannot function; attempt terminal
    /// cleanup, then exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when loading or validating a content pack.
///
/// Read and parse failures carry the path and a rendered reason, mirroring
/// [`ConfigError`], so the type stays `Clone + PartialEq` for tests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// File could not be read.
    #[error("Failed to read content pack at {path}: {reason}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// File contents are not a valid pack in the declared format.
    #[error("Invalid content pack {path}: {reason}")]
    Parse {
        /// Path with invalid contents.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// File extension is neither `.toml` nor `.json`.
    #[error("Unsupported content pack format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// Two screens share an id.
    #[error("Duplicate screen id '{0}'")]
    DuplicateScreen(ScreenId),

    /// Two sections on one screen share a key.
    #[error("Duplicate section key '{key}' on screen '{screen}'")]
    DuplicateSection {
        /// Screen holding the duplicates.
        screen: ScreenId,
        /// Repeated key.
        key: SectionKey,
    },

    /// A menu links to a screen that is not in the pack.
    #[error("Menu '{menu}' links to unknown screen '{child}'")]
    MissingChild {
        /// Menu with the dangling link.
        menu: ScreenId,
        /// Screen id that does not exist.
        child: ScreenId,
    },

    /// The declared root screen is not in the pack.
    #[error("Root screen '{0}' is not defined")]
    MissingRoot(ScreenId),
}
