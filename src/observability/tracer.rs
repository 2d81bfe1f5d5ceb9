//! Tracer provider that exports spans to a local OTLP/JSON file.
//!
//! Nothing leaves the machine: each finished span is encoded by
//! [`OtlpJsonFormatter`] and appended as one line to a size-rotated file, so
//! traces can be inspected with `jq` or loaded into an OTLP viewer afterwards.

use super::file_writer::RotatingFileWriter;
use super::span_formatter::OtlpJsonFormatter;
use futures_util::future::{self, BoxFuture, FutureExt};
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::{Config, TracerProvider};
use std::path::PathBuf;

/// Span exporter that writes each exported batch as one JSON line.
///
/// After `shutdown` every export fails instead of touching the file.
struct OtlpFileExporter {
    /// Trace file, rotated by size.
    writer: RotatingFileWriter,
    /// Encodes batches with the provider's resource and scope.
    formatter: OtlpJsonFormatter,
    shut_down: bool,
}

impl OtlpFileExporter {
    /// Encodes and writes one batch.
    ///
    /// # Returns
    ///
    /// - `Ok(())` once the line is on disk
    /// - `Err(TraceError)` if the exporter was shut down or the write failed
    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.shut_down {
            return Err(TraceError::from("trace exporter already shut down"));
        }

        let line = self.formatter.format_batch(batch).to_string();
        self.writer
            .write_line(&line)
            .map_err(|e| TraceError::from(format!("writing {}: {e}", self.writer.path().display())))
    }
}

impl SpanExporter for OtlpFileExporter {
    /// Writing is synchronous; the returned future is already resolved.
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        future::ready(self.write_batch(&batch)).boxed()
    }

    fn shutdown(&mut self) {
        self.shut_down = true;
    }

    // The resource is fixed when the exporter is built.
    fn set_resource(&mut self, _resource: &Resource) {}
}

impl std::fmt::Debug for OtlpFileExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtlpFileExporter")
            .field("writer", &self.writer)
            .field("formatter", &self.formatter)
            .field("shut_down", &self.shut_down)
            .finish()
    }
}

/// Builds a provider whose spans are written, unbatched, to `trace_file`.
///
/// The simple (non-batching) span processor exports every span as it ends, so
/// nothing is lost when the process exits without flushing.
///
/// # Parameters
///
/// * `trace_file` - JSON lines file; created on first write, rotated at 10 MiB
/// * `resource` - Attributes attached to every batch (`service.name`, ...)
/// * `scope` - Instrumentation scope name written into each batch
///
/// # Returns
///
/// A provider ready to hand a tracer to `tracing-opentelemetry`. Export errors
/// are reported through OpenTelemetry's error handler and never reach callers.
pub fn file_tracer_provider(trace_file: PathBuf, resource: Resource, scope: &'static str) -> TracerProvider {
    let exporter = OtlpFileExporter {
        writer: RotatingFileWriter::new(trace_file),
        formatter: OtlpJsonFormatter::new(resource.clone(), scope),
        shut_down: false,
    };

    TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
