//! Tracing with OpenTelemetry file export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK TracerProvider → OtlpFileExporter → JSON lines
//! ```
//!
//! Spans land in `<data_dir>/tourfinder-otlp.json`, one OTLP/JSON document per
//! line. The file rotates at 10 MiB into `.1`, `.2`, `.3` backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `tracer`: Tracer provider with the file exporter
//! - `span_formatter`: OTLP/JSON encoding
//! - [`file_writer`]: Size-rotated line writer

pub mod file_writer;
pub mod init;
mod span_formatter;
mod tracer;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, init_tracing_in, SERVICE_NAME, TRACE_FILE_NAME};
