//! OpenTelemetry-based observability with file-based trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Lines
//! ```
//!
//! - **File-Based Export**: Traces written to `~/.local/share/zellij/pau/pau-otlp.json`
//! - **Rotation**: Files rotate at 10 MB, keeping three numbered backups
//! - **OTLP Format**: One OpenTelemetry Protocol JSON document per line
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option in plugin configuration
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! ```rust,no_run
//! use pau::observability::init_tracing;
//! use pau::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};
