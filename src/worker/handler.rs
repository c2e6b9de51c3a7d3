//! Catalog worker implementation.
//!
//! The worker owns a [`CatalogSource`] and answers [`WorkerMessage`]s with
//! [`WorkerResponse`]s. [`CatalogWorker::spawn`] runs a single fetch on a
//! background thread and hands back a channel that yields exactly one response,
//! so the browser never blocks on I/O while deriving views.

use crate::catalog::CatalogSource;
use crate::domain::error::{BrowserError, Result};
use crate::domain::Podcast;
use crate::worker::{WorkerMessage, WorkerResponse};
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Thread name used for background fetches.
const WORKER_THREAD_NAME: &str = "catalog-worker";

/// Fetches the catalog on behalf of the browser.
pub struct CatalogWorker {
    source: Box<dyn CatalogSource>,
}

impl CatalogWorker {
    /// Creates a worker reading from `source`.
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// Creates a worker from an already boxed source.
    #[must_use]
    pub fn from_boxed(source: Box<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Maps a fetch result onto a response with consistent logging.
    fn handle_fetch_result(source: &str, result: Result<Vec<Podcast>>) -> WorkerResponse {
        match result {
            Ok(podcasts) => {
                tracing::debug!(source = %source, count = podcasts.len(), "catalog fetched");
                WorkerResponse::CatalogLoaded { podcasts }
            }
            Err(e) => {
                let failure = e.into_load_failure();
                tracing::debug!(source = %source, error = %failure, "catalog fetch failed");
                WorkerResponse::CatalogFailed {
                    reason: failure.reason().to_string(),
                }
            }
        }
    }

    /// Attaches the parent trace context from a message to the current thread.
    ///
    /// Returns a guard that must be held while the message is processed.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);

        Some(otel_context.attach())
    }

    /// Processes a message synchronously and returns the response.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        let span = tracing::debug_span!("worker_handle_message", message_type = ?message);
        let _guard = span.entered();

        match message {
            WorkerMessage::FetchCatalog { .. } => {
                let source = self.source.describe();
                Self::handle_fetch_result(&source, self.source.fetch())
            }
        }
    }

    /// Processes `message` on a background thread.
    ///
    /// The returned receiver yields the single response once the fetch
    /// finishes. Dropping the receiver abandons the fetch; the thread still
    /// runs to completion and its response is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`BrowserError::Io`] if the thread cannot be spawned.
    pub fn spawn(mut self, message: WorkerMessage) -> Result<Receiver<WorkerResponse>> {
        let (tx, rx) = mpsc::channel();

        thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                let response = self.handle_message(message);
                if tx.send(response).is_err() {
                    tracing::debug!("catalog response dropped, receiver gone");
                }
            })?;

        Ok(rx)
    }
}

/// Blocks until the worker answers.
///
/// # Errors
///
/// Returns [`BrowserError::Worker`] if the worker thread ended without
/// responding (for example because the source panicked).
pub fn wait_for_response(receiver: &Receiver<WorkerResponse>) -> Result<WorkerResponse> {
    receiver
        .recv()
        .map_err(|e| BrowserError::Worker(format!("catalog worker hung up: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalogSource;
    use crate::domain::PodcastId;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    struct PanickingSource;

    impl CatalogSource for PanickingSource {
        fn describe(&self) -> String {
            "panicking".to_string()
        }

        fn fetch(&mut self) -> Result<Vec<Podcast>> {
            panic!("source exploded");
        }
    }

    fn podcast() -> Podcast {
        Podcast::new(
            PodcastId(1),
            "Solo",
            [],
            Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap(),
            0.0,
        )
    }

    #[test]
    fn handle_message_returns_loaded_catalog() {
        let mut worker = CatalogWorker::new(InMemoryCatalogSource::new(vec![podcast()]));
        let response = worker.handle_message(WorkerMessage::fetch_catalog());
        assert_eq!(response, WorkerResponse::CatalogLoaded { podcasts: vec![podcast()] });
    }

    #[test]
    fn failures_keep_the_source_reason() {
        let mut worker = CatalogWorker::new(InMemoryCatalogSource::failing("HTTP 503"));
        let response = worker.handle_message(WorkerMessage::fetch_catalog());
        assert_eq!(response, WorkerResponse::CatalogFailed { reason: "HTTP 503".to_string() });
    }

    #[test]
    fn spawned_fetch_answers_once() {
        let worker = CatalogWorker::new(InMemoryCatalogSource::new(vec![podcast()]));
        let receiver = worker.spawn(WorkerMessage::fetch_catalog()).unwrap();

        let response = wait_for_response(&receiver).unwrap();
        assert!(matches!(response, WorkerResponse::CatalogLoaded { .. }));
        assert!(receiver.recv().is_err());
    }

    #[test]
    fn panicking_source_surfaces_as_worker_error() {
        let worker = CatalogWorker::new(PanickingSource);
        let receiver = worker.spawn(WorkerMessage::fetch_catalog()).unwrap();
        assert!(matches!(wait_for_response(&receiver), Err(BrowserError::Worker(_))));
    }
}
