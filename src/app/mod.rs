//! Application layer coordinating state and events.
//!
//! Sits between the host (the binary, or any other front end) and the catalog,
//! view and worker layers.
//!
//! ```text
//! User Input ─→ Event ─→ handle_event ─→ AppState command ─→ derive ─→ DerivedView
//!                  ↑
//!  Worker Response ┘
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing and render decisions
//! - [`state`]: Central state container with the synchronous command surface

pub mod handler;
pub mod state;

pub use handler::{handle_event, Event};
pub use state::AppState;
