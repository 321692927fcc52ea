// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! OpenTelemetry backend for the tracer capability.
//!
//! [`OtelTracerProvider`] resolves tracers through the process-global
//! OpenTelemetry registry, so spans land in whatever SDK the application
//! installed (see [`crate::bootstrap`] for an OTLP pipeline). Without an
//! installed SDK the global registry hands out no-op tracers and wrapped
//! methods run untraced, at negligible cost.
//!
//! The span is made active (attached to the ambient [`Context`]) for the
//! duration of the synchronous `start_active_span` callback, so child spans
//! created there nest correctly. For asynchronous methods the wrapper's
//! future runs after the callback returns; to parent child spans created
//! across `.await` points, compose the wrapped call with
//! [`opentelemetry::trace::FutureExt::with_context`].

use std::error::Error;

use opentelemetry::global::{self, BoxedTracer};
use opentelemetry::trace::{Status, TraceContextExt, Tracer as _};
use opentelemetry::{Context, KeyValue, Value};

use crate::tracer::{SpanHandle, Tracer, TracerProvider};
use crate::types::{AttributeValue, Attributes, SpanStatus};

impl From<AttributeValue> for Value {
    fn from(value: AttributeValue) -> Self {
        match value {
            AttributeValue::Bool(v) => Value::Bool(v),
            AttributeValue::I64(v) => Value::I64(v),
            AttributeValue::F64(v) => Value::F64(v),
            AttributeValue::String(v) => Value::String(v.into()),
        }
    }
}

impl From<SpanStatus> for Status {
    fn from(status: SpanStatus) -> Self {
        match status {
            SpanStatus::Unset => Status::Unset,
            SpanStatus::Ok => Status::Ok,
            SpanStatus::Error { message } => Status::error(message),
        }
    }
}

fn to_key_values(attributes: Attributes) -> Vec<KeyValue> {
    attributes
        .into_iter()
        .map(|(key, value)| KeyValue::new(key, Value::from(value)))
        .collect()
}

/// Tracer provider backed by the global OpenTelemetry registry.
///
/// The Rust counterpart of `opentelemetry.trace.getTracer(scope)`: scope
/// names become instrumentation-scope names on the emitted spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtelTracerProvider;

impl TracerProvider for OtelTracerProvider {
    type Tracer = OtelTracer;

    fn tracer(&self, scope: &str) -> OtelTracer {
        OtelTracer {
            inner: global::tracer(scope.to_owned()),
        }
    }
}

/// Tracer that starts OpenTelemetry spans and scopes them to the callback.
pub struct OtelTracer {
    inner: BoxedTracer,
}

impl Tracer for OtelTracer {
    type Span = OtelSpan;

    fn start_active_span<R>(&self, name: &str, f: impl FnOnce(OtelSpan) -> R) -> R {
        let span = self.inner.start(name.to_owned());
        let cx = Context::current_with_span(span);
        // Active for the synchronous callback only; the guard must drop on
        // this thread before the callback's result (possibly a pending
        // future) escapes.
        let _guard = cx.clone().attach();
        f(OtelSpan { cx })
    }
}

/// Span handle operating on a span parked in its [`Context`].
pub struct OtelSpan {
    cx: Context,
}

impl OtelSpan {
    /// The context carrying this span.
    ///
    /// Useful for explicit propagation, e.g.
    /// `future.with_context(span.context().clone())`.
    pub fn context(&self) -> &Context {
        &self.cx
    }
}

impl SpanHandle for OtelSpan {
    fn set_attributes(&mut self, attributes: Attributes) {
        self.cx.span().set_attributes(to_key_values(attributes));
    }

    fn set_status(&mut self, status: SpanStatus) {
        self.cx.span().set_status(status.into());
    }

    fn record_exception(&mut self, error: &dyn Error) {
        self.cx.span().record_error(error);
    }

    fn end(self) {
        self.cx.span().end();
    }
}
