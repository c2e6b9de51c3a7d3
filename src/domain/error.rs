//! Error types for the podcast browser.
//!
//! This module defines the centralized error type [`BrowserError`], the
//! catalog-load failure [`LoadFailure`], and a [`Result`] alias used throughout
//! the crate. All errors are implemented with `thiserror`.
//!
//! The view-derivation stages never fail. Errors only appear at the edges:
//! loading the catalog, reading configuration, and parsing user-supplied tokens.

use thiserror::Error;

/// Reason a catalog load did not produce a catalog.
///
/// Surfaced verbatim to presentation. A failed load never leaves a partial
/// catalog behind.
///
/// # Examples
///
/// ```
/// use podcast_browser::domain::LoadFailure;
///
/// let failure = LoadFailure::new("connection refused");
/// assert_eq!(failure.reason(), "connection refused");
/// assert_eq!(failure.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct LoadFailure {
    reason: String,
}

impl LoadFailure {
    /// Creates a load failure with the given human-readable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// Returns the failure reason.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The main error type for podcast browser operations.
///
/// Most variants carry a description of what went wrong; I/O errors convert
/// automatically via `#[from]`.
///
/// # Examples
///
/// ```
/// use podcast_browser::domain::BrowserError;
///
/// fn parse_page(token: &str) -> Result<usize, BrowserError> {
///     token
///         .parse()
///         .map_err(|_| BrowserError::InvalidInput(format!("not a page number: {token}")))
/// }
///
/// assert!(parse_page("two").is_err());
/// ```
#[derive(Debug, Error)]
pub enum BrowserError {
    /// The catalog could not be loaded.
    #[error("Catalog load failed: {0}")]
    Load(#[from] LoadFailure),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog data was present but malformed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The background catalog worker could not deliver a response.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// A user-supplied token (genre, sort key, page) could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl BrowserError {
    /// Converts this error into the [`LoadFailure`] shown to the user.
    ///
    /// A `Load` variant is unwrapped as-is; every other variant becomes a
    /// failure whose reason is the error's display text.
    #[must_use]
    pub fn into_load_failure(self) -> LoadFailure {
        match self {
            Self::Load(failure) => failure,
            other => LoadFailure::new(other.to_string()),
        }
    }
}

/// A specialized `Result` type for podcast browser operations.
pub type Result<T> = std::result::Result<T, BrowserError>;
