//! Podcast browser: deterministic search, filtering, sorting and pagination
//! over a podcast catalog.
//!
//! The crate provides:
//! - A view-derivation engine turning (catalog, user inputs) into the page of
//!   podcasts to display
//! - A command surface (`set_search`, `set_genre`, `set_sort_key`, `set_page`)
//!   that recomputes the view after every change
//! - A one-shot background catalog fetch with pending / loaded / failed status
//! - Optional OpenTelemetry tracing exported to a local file
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host (main.rs or any other front end)              │  ← Input & display
//! └─────────────────────────────────────────────────────┘
//!                        │ Event
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State owner
//! │  - Event handling                                   │
//! │  - Command surface, recompute-after-every-change    │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ View Engine   │   │ Catalog       │   │ Worker        │
//! │ (view/)       │   │ (catalog/)    │   │ (worker/)     │
//! │ - Filter      │   │ - Store       │   │ - Async fetch │
//! │ - Sort        │   │ - Sources     │   │ - Trace ctx   │
//! │ - Paginate    │   │ - Load status │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Podcast, genres, errors (domain/)                │
//! │  - Data directory, path expansion (infrastructure/) │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```toml
//! catalog_path = "~/podcasts/catalog.json"
//! page_size = 12
//! default_sort = "date-desc"
//! trace_level = "debug"
//! ```
//!
//! # Example
//!
//! ```rust
//! use podcast_browser::catalog::InMemoryCatalogSource;
//! use podcast_browser::{handle_event, initialize, request_catalog, Config, Event};
//! use podcast_browser::worker::wait_for_response;
//!
//! let mut state = initialize(&Config::default());
//! let receiver = request_catalog(&mut state, Box::new(InMemoryCatalogSource::new(vec![])))?;
//! let response = wait_for_response(&receiver)?;
//! handle_event(&mut state, &Event::WorkerResponse(response));
//!
//! assert!(state.status().is_loaded());
//! assert!(state.view().items.is_empty());
//! # Ok::<(), podcast_browser::BrowserError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod infrastructure;
pub mod view;
pub mod worker;

pub mod observability;

pub use app::{handle_event, AppState, Event};
pub use domain::{BrowserError, LoadFailure, Podcast, Result};
pub use view::{DerivedView, GenreFilter, SortKey, ViewState};

use catalog::CatalogSource;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use worker::{CatalogWorker, WorkerMessage, WorkerResponse};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(12) {
    Some(size) => size,
    None => unreachable!(),
};

/// Browser configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON catalog file to load. `~` is expanded when parsed.
    pub catalog_path: Option<PathBuf>,

    /// Podcasts per page, fixed for the session. Default: 12
    pub page_size: NonZeroUsize,

    /// Sort key selected at session start. Default: `date-desc`
    pub default_sort: SortKey,

    /// Tracing filter (`trace`, `debug`, `info`, `warn`, `error`, or an
    /// `EnvFilter` directive). `None` disables tracing unless `RUST_LOG` is set.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            default_sort: SortKey::default(),
            trace_level: None,
        }
    }
}

/// On-disk configuration file layout.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    catalog_path: Option<String>,
    page_size: Option<usize>,
    default_sort: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a string key/value map.
    ///
    /// Lenient: unparseable values fall back to their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `catalog_path`: tilde-expanded path
    /// - `page_size`: positive integer, falls back to 12
    /// - `default_sort`: sort token, falls back to `date-desc`
    /// - `trace_level`: passed through
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use podcast_browser::{Config, SortKey};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "0".to_string());
    /// map.insert("default_sort".to_string(), "title-asc".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size.get(), 12);
    /// assert_eq!(config.default_sort, SortKey::TitleAsc);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let page_size = map
            .get("page_size")
            .and_then(|s| s.trim().parse::<NonZeroUsize>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let default_sort = map
            .get("default_sort")
            .and_then(|s| {
                s.parse::<SortKey>()
                    .map_err(|e| tracing::debug!(error = %e, "ignoring default_sort"))
                    .ok()
            })
            .unwrap_or_default();

        Self {
            catalog_path: map
                .get("catalog_path")
                .map(|s| infrastructure::expand_tilde(s.trim())),
            page_size,
            default_sort,
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// Strict: unknown keys, a zero page size or an unknown sort key are errors.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Io`] if the file cannot be read and
    /// [`BrowserError::Config`] if its contents are invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            BrowserError::Config(message) => {
                BrowserError::Config(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Config`] if the text is not a valid configuration.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile =
            toml::from_str(contents).map_err(|e| BrowserError::Config(e.to_string()))?;

        let page_size = file
            .page_size
            .map(|size| {
                NonZeroUsize::new(size)
                    .ok_or_else(|| BrowserError::Config("page_size must be positive".to_string()))
            })
            .transpose()?
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let default_sort = file
            .default_sort
            .as_deref()
            .map(str::parse::<SortKey>)
            .transpose()
            .map_err(|e| BrowserError::Config(e.to_string()))?
            .unwrap_or_default();

        Ok(Self {
            catalog_path: file.catalog_path.as_deref().map(infrastructure::expand_tilde),
            page_size,
            default_sort,
            trace_level: file.trace_level,
        })
    }
}

/// Creates the session-start application state.
///
/// The catalog is empty and pending until a fetch answers.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        page_size = config.page_size.get(),
        default_sort = %config.default_sort,
        "initializing podcast browser"
    );
    AppState::from_config(config)
}

/// Starts the one-shot catalog fetch on the worker thread.
///
/// Marks the state as pending and returns the channel on which the single
/// [`WorkerResponse`] arrives; feed it back through [`handle_event`].
///
/// # Errors
///
/// Returns [`BrowserError::Io`] if the worker thread cannot be spawned.
pub fn request_catalog(
    state: &mut AppState,
    source: Box<dyn CatalogSource>,
) -> Result<Receiver<WorkerResponse>> {
    let span = tracing::debug_span!("request_catalog", source = %source.describe());
    let _guard = span.enter();

    handle_event(state, &Event::CatalogRequested);
    CatalogWorker::from_boxed(source).spawn(WorkerMessage::fetch_catalog())
}
