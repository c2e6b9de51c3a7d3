//! View deriver: composes filter, sort and pagination into a [`DerivedView`].
//!
//! [`derive`] is a pure function of the catalog and the [`ViewState`]. Calling
//! it twice with the same inputs always yields the same view, and the catalog
//! is only ever read.

use super::state::ViewState;
use super::{filter, paginate, sort};
use crate::domain::Podcast;

/// The slice of the catalog shown to the user.
///
/// Computed by [`derive`]; holds no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    /// Podcasts on the current page, in display order.
    pub items: Vec<Podcast>,

    /// Number of podcasts matching the search and genre, across all pages.
    pub total_matches: usize,

    /// Number of pages; 1 when nothing matches.
    pub total_pages: usize,

    /// Page being shown, clamped into `0..total_pages`.
    pub page: usize,
}

impl DerivedView {
    /// The view of an empty catalog.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_matches: 0,
            total_pages: 1,
            page: 0,
        }
    }

    /// Returns true if nothing matched. Distinct from a failed load.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_matches == 0
    }

    /// Returns true if a page precedes the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Returns true if a page follows the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

impl Default for DerivedView {
    fn default() -> Self {
        Self::empty()
    }
}

/// Derives the visible page from `catalog` and `state`.
///
/// Runs the filter, sort and pagination stages in that order on every call.
///
/// # Example
///
/// ```rust
/// use podcast_browser::view::{derive, SortKey, ViewState};
/// use std::num::NonZeroUsize;
///
/// let state = ViewState::new(NonZeroUsize::new(12).unwrap(), SortKey::DateDesc);
/// let view = derive(&[], &state);
/// assert_eq!(view.total_pages, 1);
/// assert!(view.items.is_empty());
/// ```
#[must_use]
pub fn derive(catalog: &[Podcast], state: &ViewState) -> DerivedView {
    let _span = tracing::debug_span!("derive_view",
        catalog_len = catalog.len(),
        genre = %state.genre,
        sort_key = %state.sort_key,
        requested_page = state.page
    ).entered();

    let matches = filter::apply(catalog, &state.search, state.genre);
    let ordered = sort::apply(&matches, state.sort_key);
    let page = paginate::apply(&ordered, state.page, state.page_size);

    let view = DerivedView {
        items: page.items.into_iter().cloned().collect(),
        total_matches: ordered.len(),
        total_pages: page.total_pages,
        page: page.page,
    };

    tracing::debug!(
        total_matches = view.total_matches,
        total_pages = view.total_pages,
        page = view.page,
        items = view.items.len(),
        "view derived"
    );

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GenreId, PodcastId};
    use crate::view::state::{Command, GenreFilter, SortKey};
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use std::num::NonZeroUsize;

    fn catalog() -> Vec<Podcast> {
        (1..=7)
            .map(|id| {
                Podcast::new(
                    PodcastId(id),
                    format!("Show {id}"),
                    [GenreId(u32::try_from(id % 2).unwrap())],
                    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
                    0.0,
                )
            })
            .collect()
    }

    fn state(page_size: usize) -> ViewState {
        ViewState::new(NonZeroUsize::new(page_size).unwrap(), SortKey::TitleAsc)
    }

    #[test]
    fn page_is_clamped_and_items_bounded() {
        let catalog = catalog();
        let view = derive(&catalog, &state(3).apply(Command::SetPage(40)));

        assert_eq!(view.total_matches, 7);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 2);
        assert_eq!(view.items.len(), 1);
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn derivation_is_repeatable_and_leaves_catalog_untouched() {
        let catalog = catalog();
        let before = catalog.clone();
        let state = state(2).apply(Command::SetGenre(GenreFilter::Genre(GenreId(1))));

        let first = derive(&catalog, &state);
        let second = derive(&catalog, &state);

        assert_eq!(first, second);
        assert_eq!(catalog, before);
        assert_eq!(first.total_matches, 4);
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        assert_eq!(derive(&[], &state(4)), DerivedView::empty());
    }
}
