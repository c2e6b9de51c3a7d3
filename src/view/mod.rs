//! View-derivation engine.
//!
//! Turns a catalog plus the user's inputs into the page of podcasts to show:
//!
//! ```text
//! Catalog ─┐
//!          ├─→ filter ─→ sort ─→ paginate ─→ DerivedView
//! ViewState┘
//! ```
//!
//! Every stage is a pure function. Nothing here owns state beyond the
//! [`ViewState`] value passed in.
//!
//! # Modules
//!
//! - [`state`]: User inputs, sort options and the command reducer
//! - [`filter`]: Genre and title-search filtering
//! - [`sort`]: Deterministic total orderings
//! - [`paginate`]: Page slicing with clamping
//! - [`deriver`]: Composition of the three stages

pub mod deriver;
pub mod filter;
pub mod paginate;
pub mod sort;
pub mod state;

pub use deriver::{derive, DerivedView};
pub use state::{Command, GenreFilter, SortKey, SortOption, ViewState, ALL_GENRES, SORT_OPTIONS};
