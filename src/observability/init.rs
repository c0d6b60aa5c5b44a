//! Tracing subscriber setup.

use super::tracer;
use crate::domain::Result;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute and instrumentation scope.
pub const SERVICE_NAME: &str = "book-finder";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "book-finder-otlp.json";

const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to the trace file.
///
/// An unparsable `trace_level` falls back to `info`. Calling this again after
/// a subscriber is installed has no effect.
///
/// # Errors
///
/// [`BookFinderError::Io`](crate::BookFinderError::Io) if the data directory
/// cannot be created. The plugin keeps running without traces.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let data_dir = crate::infrastructure::paths::get_data_dir();
    std::fs::create_dir_all(&data_dir)?;

    let resource = Resource::new(vec![opentelemetry::KeyValue::new(
        "service.name",
        SERVICE_NAME,
    )]);

    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);

    let tracer = provider.tracer(SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(tracer);

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer);

    let _ = subscriber.try_init();

    tracing::info!(level, "tracing initialized");
    Ok(())
}
