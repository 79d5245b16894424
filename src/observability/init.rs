//! Tracing initialization and subscriber setup.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service and scope name attached to every exported span.
pub const SERVICE_NAME: &str = "portfolio-directory";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "directory-otlp.json";

/// Installs the global subscriber when `config.trace_level` is set.
///
/// Spans are filtered by an [`EnvFilter`] built from the configured level
/// (`RUST_LOG` syntax, so `portfolio_directory=debug` works too) and exported
/// to `<data dir>/directory-otlp.json`.
///
/// Returns the provider so the caller can shut it down on exit, or `None` if
/// tracing is disabled or the data directory cannot be created. Tracing is
/// optional; failures here never stop the program.
///
/// # Example
///
/// ```rust,no_run
/// use portfolio_directory::observability::init_tracing;
/// use portfolio_directory::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// let _provider = init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) -> Option<TracerProvider> {
    let level = config.trace_level.as_deref()?;

    let data_dir = paths::data_dir();
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("tracing disabled: cannot create {}: {e}", data_dir.display());
        return None;
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, SERVICE_NAME);

    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer);

    if subscriber.try_init().is_err() {
        return None;
    }
    Some(provider)
}
