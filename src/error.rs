//! Error types for dephealth operations.
//!
//! This module defines [`DepHealthError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DepHealthError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DepHealthError::Other`) for unexpected errors
//! - Scanning is fail-open: a malformed manifest or unreadable source file is
//!   never an error, it just contributes nothing to the report

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for dephealth operations.
#[derive(Debug, Error)]
pub enum DepHealthError {
    /// A severity string outside {critical, warning, info} was used to
    /// construct a finding. Only the engine constructs findings, so this
    /// signals a programming error, not a scannable condition.
    #[error("Invalid severity: {value}")]
    InvalidSeverity { value: String },

    /// Failed to parse the tool's own configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A TTL or duration string could not be parsed.
    #[error("Invalid duration: {value}")]
    InvalidDuration { value: String },

    /// An ecosystem identifier was requested that has no registered profile.
    #[error("Unknown ecosystem: {name}")]
    UnknownEcosystem { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for dephealth operations.
pub type Result<T> = std::result::Result<T, DepHealthError>;
