//! Background worker for the one-shot catalog fetch.
//!
//! The fetch is the only asynchronous step in the browser. It runs on its own
//! thread and reports back over a channel; trace context travels with the
//! request so worker spans join the caller's trace.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and thread spawning

pub mod handler;
pub mod messages;

pub use handler::{wait_for_response, CatalogWorker};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
