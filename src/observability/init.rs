//! Tracing subscriber setup.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported span.
const SERVICE_NAME: &str = "podcast-browser";

/// File name of the trace file inside the data directory.
const TRACE_FILE_NAME: &str = "podcast-browser-otlp.json";

/// Installs the global tracing subscriber with OTLP file export.
///
/// The filter comes from `RUST_LOG` if set, otherwise from
/// `config.trace_level`. With neither set, tracing stays off and `None` is
/// returned. On success the path of the trace file is returned.
///
/// Observability is optional: an unwritable data directory or an already
/// installed subscriber disables it silently.
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| config.trace_level.as_deref().map(EnvFilter::new))?;

    let data_dir = crate::infrastructure::get_data_dir();
    std::fs::create_dir_all(&data_dir).ok()?;

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", SERVICE_NAME),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);

    let trace_file = data_dir.join(TRACE_FILE_NAME);
    let provider = tracer::create_tracer_provider(trace_file.clone(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .ok()?;

    // Keep the provider reachable for spans created after this returns.
    opentelemetry::global::set_tracer_provider(provider);

    tracing::debug!(trace_file = ?trace_file, "tracing initialized");
    Some(trace_file)
}
