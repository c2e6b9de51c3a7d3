//! Catalog layer: where podcasts come from and where they are kept.
//!
//! # Modules
//!
//! - `store`: Immutable in-memory catalog snapshot
//! - `source`: Source trait abstraction plus an in-memory source
//! - `json`: JSON file source
//! - `status`: Pending / loaded / failed state of the one-shot load

pub mod json;
pub mod source;
pub mod status;
pub mod store;

pub use json::JsonCatalogSource;
pub use source::{CatalogSource, InMemoryCatalogSource};
pub use status::LoadStatus;
pub use store::CatalogStore;
