//! OpenTelemetry-based observability with file-based trace export.
//!
//! The terminal is owned by the UI, so diagnostics never go to stdout or
//! stderr. Instead every `tracing` span is exported through OpenTelemetry to
//! a JSON-lines file in the data directory.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK simple processor → FileSpanExporter → JSON lines
//! ```
//!
//! # Configuration
//!
//! Tracing is off unless `trace_level` is set. The value uses `EnvFilter`
//! syntax, e.g. `debug` or `portfolio_directory::worker=trace`.
//!
//! # Modules
//!
//! - `init`: Subscriber setup
//! - `tracer`: Tracer provider and span exporter
//! - `span_formatter`: Serializable span records
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
