//! Catalog worker message types.
//!
//! Defines the request and response exchanged between the browser and the
//! background thread that fetches the catalog, including the trace context that
//! links the worker's spans to the span that requested the fetch.

use crate::domain::Podcast;
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
///
/// Captures the current trace and span IDs from OpenTelemetry so spans opened
/// on the worker thread join the requesting trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the current
    /// span context is otherwise invalid.
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if span_context.is_valid() {
            Some(Self {
                trace_id: format!("{:032x}", span_context.trace_id()),
                parent_span_id: format!("{:016x}", span_context.span_id()),
            })
        } else {
            tracing::trace!("no valid span context to propagate");
            None
        }
    }
}

/// Requests sent to the catalog worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Fetch the whole catalog from the worker's source.
    FetchCatalog {
        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `FetchCatalog` message carrying the current trace context.
    #[must_use]
    pub fn fetch_catalog() -> Self {
        Self::FetchCatalog {
            trace_context: TraceContext::from_current(),
        }
    }

    /// Returns the trace context attached to this message.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::FetchCatalog { trace_context } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the catalog worker back to the browser.
///
/// Exactly one response is sent per fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The catalog was fetched.
    CatalogLoaded {
        /// Podcasts in source order.
        podcasts: Vec<Podcast>,
    },

    /// The fetch failed.
    CatalogFailed {
        /// Human-readable failure reason, shown as-is.
        reason: String,
    },
}
