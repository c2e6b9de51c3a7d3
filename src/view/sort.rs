//! Sort stage: orders a filtered subset by the selected [`SortKey`].
//!
//! Every comparator ends with an id tie-break, so two distinct podcasts never
//! compare equal. This total order is what makes pagination deterministic.

use super::state::SortKey;
use crate::domain::Podcast;
use std::cmp::Ordering;

/// Compares two podcasts under `key`.
#[must_use]
pub fn compare(key: SortKey, a: &Podcast, b: &Podcast) -> Ordering {
    let primary = match key {
        SortKey::TitleAsc => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::DateDesc => b.updated.cmp(&a.updated),
        SortKey::PopularityDesc => b.popularity.total_cmp(&a.popularity),
    };

    primary.then_with(|| a.id.cmp(&b.id))
}

/// Returns `subset` ordered by `key`, leaving the input untouched.
///
/// # Example
///
/// ```rust
/// use podcast_browser::view::{sort, SortKey};
///
/// let ordered = sort::apply(&[], SortKey::TitleAsc);
/// assert!(ordered.is_empty());
/// ```
#[must_use]
pub fn apply<'a>(subset: &[&'a Podcast], key: SortKey) -> Vec<&'a Podcast> {
    let _span = tracing::debug_span!("sort_stage", len = subset.len(), sort_key = %key).entered();

    let mut ordered = subset.to_vec();
    ordered.sort_by(|a, b| compare(key, a, b));
    ordered
}
