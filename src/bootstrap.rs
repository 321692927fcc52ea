// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! OTLP trace pipeline bootstrap (feature `otlp`).
//!
//! External tracing infrastructure: wiring this is not part of the span
//! wrapper's contract, but applications need it exactly once at startup, so
//! the crate ships it behind the `otlp` feature. The pipeline exports spans
//! over OTLP/gRPC in batches on the Tokio runtime and registers itself as
//! the global provider, which is where [`crate::otel::OtelTracerProvider`]
//! resolves tracers from.
//!
//! The exporter endpoint is taken from the `OTEL_TRACES_EXPORTER_URL`
//! environment variable when set, otherwise the exporter's default
//! (`http://localhost:4317`) applies.
//!
//! # Example
//!
//! ```rust,ignore
//! use tracewrap::bootstrap;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     bootstrap::init_tracing("my-service", env!("CARGO_PKG_VERSION"))?;
//!     // ... run the application; wrapped methods now export spans ...
//!     bootstrap::shutdown_tracing();
//!     Ok(())
//! }
//! ```

use std::env;

use opentelemetry::{global, KeyValue};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{runtime, trace as sdktrace, Resource};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use tracing::info;

/// Environment variable naming the OTLP trace exporter endpoint.
pub const OTEL_TRACES_EXPORTER_URL: &str = "OTEL_TRACES_EXPORTER_URL";

/// Errors from installing the OTLP trace pipeline.
#[derive(Debug, thiserror::Error)]
pub enum TracingInitError {
    /// The OTLP pipeline could not be built or installed.
    #[error("failed to install OTLP trace pipeline: {0}")]
    Pipeline(#[from] opentelemetry::trace::TraceError),

    /// The exporter endpoint environment variable is set but unreadable.
    #[error("invalid OTEL_TRACES_EXPORTER_URL value: {0}")]
    Environment(#[from] env::VarError),
}

/// Installs a batched OTLP trace pipeline as the global tracer provider.
///
/// `service_name` and `service_version` become the `service.name` and
/// `service.version` resource attributes on every exported span. Must be
/// called from within a Tokio runtime (the batch exporter spawns there).
pub fn init_tracing(
    service_name: impl Into<String>,
    service_version: impl Into<String>,
) -> Result<sdktrace::Tracer, TracingInitError> {
    let mut exporter = opentelemetry_otlp::new_exporter().tonic();
    match env::var(OTEL_TRACES_EXPORTER_URL) {
        Ok(endpoint) => exporter = exporter.with_endpoint(endpoint),
        Err(env::VarError::NotPresent) => {}
        Err(err) => return Err(err.into()),
    }

    let resource = Resource::new([
        KeyValue::new(SERVICE_NAME, service_name.into()),
        KeyValue::new(SERVICE_VERSION, service_version.into()),
    ]);

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(sdktrace::Config::default().with_resource(resource))
        .install_batch(runtime::Tokio)?;

    info!("OTLP trace pipeline installed");

    Ok(tracer)
}

/// Flushes pending spans and shuts down the global tracer provider.
pub fn shutdown_tracing() {
    global::shutdown_tracer_provider();
    info!("tracing terminated");
}
