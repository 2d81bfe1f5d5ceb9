//! Subscriber setup.
//!
//! One `tracing-subscriber` registry with two layers: an `EnvFilter` built from
//! the configured level, and an OpenTelemetry layer whose provider writes spans
//! to a local file. No stdout/stderr logging is installed, so command output
//! stays clean.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use std::path::Path;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `service.name` resource attribute on every exported batch.
pub const SERVICE_NAME: &str = "Tourfinder";

/// Trace file name inside the data directory.
pub const TRACE_FILE_NAME: &str = "tourfinder-otlp.json";

/// Installs the global subscriber, exporting spans to
/// `<data_dir>/tourfinder-otlp.json`.
///
/// The filter comes from `config.trace_level` (for example `"debug"` or
/// `"tourfinder::catalog=trace"`), defaulting to `"info"`. If the data directory
/// cannot be created, tracing stays disabled. Calling this more than once has no
/// further effect.
///
/// # Parameters
///
/// * `config` - Only `trace_level` is read
///
/// ```rust,no_run
/// use tourfinder::observability::init_tracing;
/// use tourfinder::Config;
///
/// init_tracing(&Config::default());
/// tracing::info!("ready");
/// ```
pub fn init_tracing(config: &Config) {
    init_tracing_in(&crate::infrastructure::get_data_dir(), config);
}

/// Like [`init_tracing`], with an explicit output directory.
///
/// # Parameters
///
/// * `data_dir` - Created if missing; the trace file is written inside it
/// * `config` - Source of the filter directive
///
/// An invalid `trace_level` directive falls back to `"info"` instead of failing.
pub fn init_tracing_in(data_dir: &Path, config: &Config) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::file_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource, "tourfinder");

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(provider.tracer("tourfinder")))
        .try_init();
}
