//! In-memory catalog snapshot.

use crate::domain::Podcast;
use std::sync::Arc;

/// Holds the podcast catalog for the session.
///
/// The catalog is an immutable snapshot. [`CatalogStore::load`] swaps in a new
/// snapshot wholesale; nothing ever edits podcasts in place, so snapshots
/// handed out by [`CatalogStore::all`] stay valid after a reload.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    podcasts: Arc<[Podcast]>,
}

impl CatalogStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            podcasts: Arc::from(Vec::new()),
        }
    }

    /// Replaces the current snapshot with `podcasts`. No merging happens.
    pub fn load(&mut self, podcasts: Vec<Podcast>) {
        tracing::debug!(
            previous = self.podcasts.len(),
            loaded = podcasts.len(),
            "catalog snapshot replaced"
        );
        self.podcasts = Arc::from(podcasts);
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn all(&self) -> Arc<[Podcast]> {
        Arc::clone(&self.podcasts)
    }

    /// Returns the current snapshot as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Podcast] {
        &self.podcasts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PodcastId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn podcast(id: u64) -> Podcast {
        Podcast::new(
            PodcastId(id),
            format!("Show {id}"),
            [],
            Utc.with_ymd_and_hms(2021, 6, 1, 0, 0, 0).unwrap(),
            1.0,
        )
    }

    #[test]
    fn load_replaces_without_merging() {
        let mut store = CatalogStore::new();
        assert!(store.is_empty());

        store.load(vec![podcast(1), podcast(2)]);
        let first = store.all();

        store.load(vec![podcast(3)]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.as_slice()[0].id, PodcastId(3));
        assert_eq!(first.len(), 2);
    }
}
