//! Domain layer for the podcast browser.
//!
//! Core types independent of how the catalog is fetched or how views are
//! presented.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`podcast`]: Podcast model and identifier types
//! - [`genre`]: Static genre reference list

pub mod error;
pub mod genre;
pub mod podcast;

pub use error::{BrowserError, LoadFailure, Result};
pub use genre::{Genre, GENRES};
pub use podcast::{GenreId, Podcast, PodcastId};
