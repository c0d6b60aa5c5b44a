//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `/host/.local/share/zellij/book-finder/book-finder-otlp.json`
//! inside the sandbox, one OTLP JSON document per line. The file
//! rotates at 10 MB and keeps 3 backups.
//!
//! The filter comes from the `trace_level` plugin option, default `"info"`.
//! Each handled event opens a `handle_event` span; fetch lifecycle,
//! stale-response discards and failures are logged inside it.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Size-rotated append-only writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
