//! Application state: catalog, user inputs and the current derived view.
//!
//! [`AppState`] is the single owner of everything the browser knows. Every
//! mutation goes through one of its command methods, and every command ends by
//! recomputing the [`DerivedView`] from scratch, so the view held here is
//! always `derive(catalog, view_state)`.
//!
//! # State Components
//!
//! - **Catalog**: Immutable podcast snapshot, replaced wholesale on load
//! - **View State**: Search text, genre, sort key and requested page
//! - **Load Status**: Pending, loaded or failed catalog fetch
//! - **View**: Page of podcasts derived from the two above
//!
//! # Example
//!
//! ```rust
//! use podcast_browser::app::AppState;
//! use podcast_browser::view::SortKey;
//! use std::num::NonZeroUsize;
//!
//! let mut state = AppState::new(NonZeroUsize::new(12).unwrap(), SortKey::DateDesc);
//! state.load_catalog(vec![]);
//! let view = state.set_search("history");
//! assert_eq!(view.total_matches, 0);
//! ```

use crate::catalog::{CatalogStore, LoadStatus};
use crate::domain::{LoadFailure, Podcast};
use crate::view::{derive, Command, DerivedView, GenreFilter, SortKey, ViewState};
use crate::Config;
use std::num::NonZeroUsize;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: CatalogStore,
    view_state: ViewState,
    status: LoadStatus,
    view: DerivedView,
}

impl AppState {
    /// Creates the session-start state: empty catalog, pending load, default inputs.
    #[must_use]
    pub fn new(page_size: NonZeroUsize, sort_key: SortKey) -> Self {
        Self {
            catalog: CatalogStore::new(),
            view_state: ViewState::new(page_size, sort_key),
            status: LoadStatus::Pending,
            view: DerivedView::empty(),
        }
    }

    /// Creates the session-start state from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.page_size, config.default_sort)
    }

    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    #[must_use]
    pub const fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Returns the current derived view.
    #[must_use]
    pub const fn view(&self) -> &DerivedView {
        &self.view
    }

    /// Marks the catalog fetch as in flight.
    pub fn begin_load(&mut self) {
        tracing::debug!("catalog load pending");
        self.status = LoadStatus::Pending;
    }

    /// Installs a freshly loaded catalog and recomputes the view.
    ///
    /// The user's inputs are kept; the page is clamped against the new result.
    pub fn load_catalog(&mut self, podcasts: Vec<Podcast>) -> &DerivedView {
        self.catalog.load(podcasts);
        self.status = LoadStatus::Loaded;
        self.recompute()
    }

    /// Records a failed load. The catalog is emptied; no partial data is kept.
    pub fn fail_load(&mut self, failure: LoadFailure) -> &DerivedView {
        tracing::debug!(reason = %failure, "catalog load failed");
        self.catalog.load(Vec::new());
        self.status = LoadStatus::Failed(failure);
        self.recompute()
    }

    /// Applies a command to the view state and recomputes the view.
    pub fn dispatch(&mut self, command: Command) -> &DerivedView {
        let _span = tracing::debug_span!("dispatch", command = ?command).entered();

        let previous_page = self.view_state.page;
        self.view_state = self.view_state.clone().apply(command);

        tracing::trace!(
            previous_page,
            page = self.view_state.page,
            "view state updated"
        );

        self.recompute()
    }

    /// Replaces the search text; resets to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) -> &DerivedView {
        self.dispatch(Command::SetSearch(search.into()))
    }

    /// Replaces the genre selection; resets to the first page.
    pub fn set_genre(&mut self, genre: GenreFilter) -> &DerivedView {
        self.dispatch(Command::SetGenre(genre))
    }

    /// Replaces the sort key; resets to the first page.
    pub fn set_sort_key(&mut self, sort_key: SortKey) -> &DerivedView {
        self.dispatch(Command::SetSortKey(sort_key))
    }

    /// Requests a page. Out-of-range pages are clamped in the derived view.
    pub fn set_page(&mut self, page: usize) -> &DerivedView {
        self.dispatch(Command::SetPage(page))
    }

    /// Moves to the page after the one shown, if any.
    pub fn next_page(&mut self) -> &DerivedView {
        let page = if self.view.has_next() {
            self.view.page + 1
        } else {
            self.view.page
        };
        self.set_page(page)
    }

    /// Moves to the page before the one shown, if any.
    pub fn previous_page(&mut self) -> &DerivedView {
        self.set_page(self.view.page.saturating_sub(1))
    }

    fn recompute(&mut self) -> &DerivedView {
        self.view = derive(self.catalog.as_slice(), &self.view_state);
        &self.view
    }
}
