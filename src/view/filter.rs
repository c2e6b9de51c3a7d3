//! Filter stage: narrows the catalog by genre and title search.

use super::state::GenreFilter;
use crate::domain::Podcast;

/// Returns the podcasts matching `genre` and `search`, in catalog order.
///
/// A podcast matches when the genre selection is [`GenreFilter::All`] or its
/// genre set contains the selected id, and when the search is blank or its
/// title contains the search text case-insensitively.
///
/// A blank (empty or whitespace-only) search does not narrow anything. An
/// unknown genre id matches nothing.
///
/// # Example
///
/// ```rust
/// use podcast_browser::view::{filter, GenreFilter};
///
/// let matches = filter::apply(&[], "tech", GenreFilter::All);
/// assert!(matches.is_empty());
/// ```
#[must_use]
pub fn apply<'a>(catalog: &'a [Podcast], search: &str, genre: GenreFilter) -> Vec<&'a Podcast> {
    let _span = tracing::debug_span!("filter_stage",
        catalog_len = catalog.len(),
        query_len = search.len(),
        genre = %genre
    ).entered();

    let needle = if search.trim().is_empty() {
        None
    } else {
        Some(search.to_lowercase())
    };

    let matches: Vec<&Podcast> = catalog
        .iter()
        .filter(|podcast| match genre {
            GenreFilter::All => true,
            GenreFilter::Genre(id) => podcast.has_genre(id),
        })
        .filter(|podcast| {
            needle
                .as_deref()
                .map_or(true, |needle| podcast.title.to_lowercase().contains(needle))
        })
        .collect();

    tracing::debug!(matched = matches.len(), "filter applied");
    matches
}
