//! Error types for bundle-config operations.
//!
//! This module defines [`BundleConfigError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Lenient configuration resolution never fails; unknown selectors fall back
//! - Strict resolution surfaces unknown selectors as `UnknownEnvironment` / `UnknownMode`
//! - Settings files and manifest emission report failures with the offending path
//! - Use `anyhow::Error` (via `BundleConfigError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for bundle-config operations.
#[derive(Debug, Error)]
pub enum BundleConfigError {
    /// Environment selector is not one of the known deployment targets.
    #[error("Unknown environment '{value}' (expected one of: dev, stg, prod)")]
    UnknownEnvironment { value: String },

    /// Mode selector is not one of the known build modes.
    #[error("Unknown build mode '{value}' (expected one of: development, production)")]
    UnknownMode { value: String },

    /// Failed to parse a settings file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid settings structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A manifest chunk specification could not be used.
    #[error("Invalid chunk '{chunk}': {message}")]
    InvalidChunk { chunk: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BundleConfigError {
    /// Process exit code for this error.
    ///
    /// Selector and settings problems are usage errors (2); everything
    /// else is a runtime failure (1).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownEnvironment { .. }
            | Self::UnknownMode { .. }
            | Self::ConfigParseError { .. }
            | Self::ConfigValidationError { .. } => 2,
            Self::InvalidChunk { .. } | Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

/// Result type alias for bundle-config operations.
pub type Result<T> = std::result::Result<T, BundleConfigError>;
