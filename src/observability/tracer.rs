//! Tracer provider exporting spans to the rotating trace file.
//!
//! The exporter implements the SDK's `SpanExporter` on top of
//! [`RotatingFile`], so every closed span ends up as an OTLP JSON line in the
//! plugin data directory instead of going over the network.

use super::file_writer::{RotatingFile, RotationPolicy};
use super::span_formatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Writes every exported batch as one OTLP JSON line.
struct FileSpanExporter {
    /// Trace file with size-based rotation.
    file: RotatingFile,
    /// Resource attached to every encoded batch.
    resource: Resource,
    /// Set by `shutdown`; later exports fail.
    is_shutdown: AtomicBool,
}

impl SpanExporter for FileSpanExporter {
    /// Encodes `batch` with [`span_formatter::encode_batch`] and appends it to
    /// the trace file as a single line.
    ///
    /// # Parameters
    ///
    /// * `batch` - Spans closed since the last export
    ///
    /// # Returns
    ///
    /// - `Ok(())` once the line is written and flushed
    /// - `Err(TraceError)` after shutdown or when the file write fails
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            let line = span_formatter::encode_batch(&self.resource, &batch).to_string();
            self.file
                .append_line(&line)
                .map_err(|e| TraceError::from(e.to_string()))
        };
        Box::pin(std::future::ready(result))
    }

    /// Marks the exporter as shut down. The file handle is closed on drop.
    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    /// Replaces the resource encoded into later batches.
    ///
    /// # Parameters
    ///
    /// * `resource` - Resource announced by the tracer provider
    fn set_resource(&mut self, resource: &Resource) {
        self.resource = resource.clone();
    }
}

impl std::fmt::Debug for FileSpanExporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSpanExporter")
            .field("file", &self.file)
            .field("is_shutdown", &self.is_shutdown)
            .finish_non_exhaustive()
    }
}

/// Creates a provider that exports each span as soon as it closes.
///
/// Zellij plugins have no async runtime, so the simple (synchronous) span
/// processor is used instead of a batching one.
///
/// # Parameters
///
/// * `file_path` - Trace file, created on the first export
/// * `resource` - Service metadata (`service.name`, `service.version`)
///
/// # Returns
///
/// A `TracerProvider` ready to back a `tracing-opentelemetry` layer.
pub fn create_tracer_provider(file_path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter {
        file: RotatingFile::new(file_path, RotationPolicy::default()),
        resource: resource.clone(),
        is_shutdown: AtomicBool::new(false),
    };

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}
