//! Event handling and state transition logic.
//!
//! Hosts translate their input (key presses, form changes, worker replies)
//! into [`Event`]s and feed them to [`handle_event`]. The handler mutates the
//! [`AppState`] and reports whether the visible output changed, so hosts can
//! skip redundant redraws.
//!
//! # Event Types
//!
//! - **Input**: `Search`, `Genre`, `Sort`, `Page`, `NextPage`, `PreviousPage`
//! - **Catalog**: `CatalogRequested`, `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use podcast_browser::app::{handle_event, AppState, Event};
//! use podcast_browser::view::SortKey;
//! use std::num::NonZeroUsize;
//!
//! let mut state = AppState::new(NonZeroUsize::new(12).unwrap(), SortKey::DateDesc);
//! let changed = handle_event(&mut state, &Event::Search("history".to_string()));
//! assert!(!changed); // nothing loaded yet, the empty view stays empty
//! ```

use crate::app::AppState;
use crate::domain::LoadFailure;
use crate::view::{GenreFilter, SortKey};
use crate::worker::WorkerResponse;

/// Events triggered by user input or by the catalog worker.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces the search text.
    Search(String),
    /// Replaces the genre selection.
    Genre(GenreFilter),
    /// Replaces the sort key.
    Sort(SortKey),
    /// Requests a specific page.
    Page(usize),
    /// Moves one page forward (no-op on the last page).
    NextPage,
    /// Moves one page back (no-op on the first page).
    PreviousPage,
    /// A catalog fetch was started.
    CatalogRequested,
    /// Wraps a response from the catalog worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event and returns true if the host should re-render.
///
/// A re-render is needed when the derived view or the load status changed.
pub fn handle_event(state: &mut AppState, event: &Event) -> bool {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind::of(event)).entered();

    let old_view = state.view().clone();
    let old_status = state.status().clone();

    match event {
        Event::Search(search) => {
            tracing::trace!(query = %search, "search updated");
            state.set_search(search.clone());
        }
        Event::Genre(genre) => {
            state.set_genre(*genre);
        }
        Event::Sort(sort_key) => {
            state.set_sort_key(*sort_key);
        }
        Event::Page(page) => {
            state.set_page(*page);
        }
        Event::NextPage => {
            state.next_page();
        }
        Event::PreviousPage => {
            state.previous_page();
        }
        Event::CatalogRequested => {
            state.begin_load();
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { podcasts } => {
                tracing::debug!(count = podcasts.len(), "catalog received");
                state.load_catalog(podcasts.clone());
            }
            WorkerResponse::CatalogFailed { reason } => {
                tracing::error!(reason = %reason, "catalog load failed");
                state.fail_load(LoadFailure::new(reason.clone()));
            }
        },
    }

    let changed = state.view() != &old_view || state.status() != &old_status;
    if !changed {
        tracing::debug!("view unchanged, skipping render");
    }
    changed
}

/// Event discriminant for span fields; avoids logging whole catalogs.
#[derive(Debug)]
enum EventKind {
    Search,
    Genre,
    Sort,
    Page,
    NextPage,
    PreviousPage,
    CatalogRequested,
    CatalogLoaded,
    CatalogFailed,
}

impl EventKind {
    const fn of(event: &Event) -> Self {
        match event {
            Event::Search(_) => Self::Search,
            Event::Genre(_) => Self::Genre,
            Event::Sort(_) => Self::Sort,
            Event::Page(_) => Self::Page,
            Event::NextPage => Self::NextPage,
            Event::PreviousPage => Self::PreviousPage,
            Event::CatalogRequested => Self::CatalogRequested,
            Event::WorkerResponse(WorkerResponse::CatalogLoaded { .. }) => Self::CatalogLoaded,
            Event::WorkerResponse(WorkerResponse::CatalogFailed { .. }) => Self::CatalogFailed,
        }
    }
}
