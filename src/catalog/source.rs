//! Catalog source abstraction.
//!
//! This module defines the [`CatalogSource`] trait that abstracts over where the
//! catalog comes from. The browser never retries a failed fetch; a source is
//! asked once and its answer is final for the session.

use crate::domain::error::Result;
use crate::domain::{LoadFailure, Podcast};

/// Supplies the podcast catalog.
///
/// Implementations must be `Send` so the fetch can run on the catalog worker
/// thread.
///
/// # Implementations
///
/// - [`JsonCatalogSource`](super::JsonCatalogSource): reads a JSON file
/// - [`InMemoryCatalogSource`]: returns a fixed list or a fixed failure
pub trait CatalogSource: Send {
    /// Short description used in logs (a path, "memory", ...).
    fn describe(&self) -> String;

    /// Fetches the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be produced. Callers surface the
    /// error to the user as a [`LoadFailure`].
    fn fetch(&mut self) -> Result<Vec<Podcast>>;
}

/// A source backed by a value held in memory.
///
/// Useful for hosts that obtained the catalog elsewhere, and for tests.
#[derive(Debug, Clone)]
pub struct InMemoryCatalogSource {
    outcome: std::result::Result<Vec<Podcast>, LoadFailure>,
}

impl InMemoryCatalogSource {
    /// A source that yields `podcasts`.
    #[must_use]
    pub const fn new(podcasts: Vec<Podcast>) -> Self {
        Self { outcome: Ok(podcasts) }
    }

    /// A source that always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(LoadFailure::new(reason)),
        }
    }
}

impl CatalogSource for InMemoryCatalogSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn fetch(&mut self) -> Result<Vec<Podcast>> {
        self.outcome.clone().map_err(Into::into)
    }
}
