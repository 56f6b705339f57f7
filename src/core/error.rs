//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FsError`] - Virtual filesystem lookups
//! - [`CatalogError`] - Translation catalog loading
//! - [`StorageError`] - localStorage operations for the language and theme preferences
//! - [`MediaQueryError`] - System color-scheme listener registration

use thiserror::Error;

/// Virtual filesystem errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// No file with this name exists
    #[error("{0}: No such file or directory")]
    NotFound(String),
}

/// Translation catalog errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog is not valid JSON or has an unexpected shape
    #[error("invalid translation catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// localStorage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// localStorage not available.
    #[error("localStorage not available")]
    Unavailable,
    /// Failed to save to localStorage.
    #[error("failed to save to localStorage")]
    WriteFailed,
}

/// Color-scheme media query errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaQueryError {
    /// `matchMedia` is missing or rejected the query.
    #[error("media query '{0}' not available")]
    Unavailable(&'static str),
    /// The change listener could not be attached.
    #[error("failed to listen for media query changes")]
    ListenerFailed,
}
