// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The injected tracer capability.
//!
//! The span wrapper never talks to a tracing backend directly; it consumes
//! the three-layer capability defined here:
//!
//! - [`TracerProvider`] hands out a [`Tracer`] for a named instrumentation
//!   scope (conventionally the enclosing type's name),
//! - [`Tracer`] runs a callback inside a freshly started active span,
//! - [`SpanHandle`] is the per-invocation span resource.
//!
//! The shipped backend is [`crate::otel`]; tests substitute a recording
//! implementation. What "active" means (ambient context, nesting) is owned
//! entirely by the backend.

use std::error::Error;

use crate::types::{Attributes, SpanStatus};

/// Hands out tracers keyed by instrumentation scope name.
///
/// Acquiring a tracer is expected to be cheap and to happen once per wrapped
/// method (at registration), not once per call.
pub trait TracerProvider {
    /// The tracer type this provider produces.
    type Tracer: Tracer;

    /// Returns a tracer for the given scope name.
    fn tracer(&self, scope: &str) -> Self::Tracer;
}

/// Creates spans and scopes a callback to them.
pub trait Tracer {
    /// The span handle type passed to callbacks.
    type Span: SpanHandle;

    /// Starts a span named `name`, invokes `f` exactly once and
    /// synchronously with the new handle, and returns `f`'s result
    /// unchanged.
    ///
    /// The handle is owned by the callback: it may be driven to completion
    /// inside the callback (synchronous calls) or moved into a future and
    /// finished after settlement (asynchronous calls). The implementation
    /// decides whether and how the span is made active for the duration of
    /// the callback.
    fn start_active_span<R>(&self, name: &str, f: impl FnOnce(Self::Span) -> R) -> R;
}

/// One invocation's span resource.
///
/// Handles are never shared or reused across invocations. [`end`] consumes
/// the handle, so a span cannot be ended twice.
///
/// [`end`]: SpanHandle::end
pub trait SpanHandle {
    /// Replaces the span's attributes with `attributes`.
    fn set_attributes(&mut self, attributes: Attributes);

    /// Sets the span's terminal status.
    fn set_status(&mut self, status: SpanStatus);

    /// Records a failure on the span.
    fn record_exception(&mut self, error: &dyn Error);

    /// Ends the span, releasing the handle.
    fn end(self);
}

/// A provider whose tracers record nothing.
///
/// Use this to disable tracing entirely, e.g. in tests of business logic
/// that should not depend on a tracing backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracerProvider;

impl TracerProvider for NoopTracerProvider {
    type Tracer = NoopTracer;

    fn tracer(&self, _scope: &str) -> NoopTracer {
        NoopTracer
    }
}

/// Tracer that starts inert spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

impl Tracer for NoopTracer {
    type Span = NoopSpan;

    fn start_active_span<R>(&self, _name: &str, f: impl FnOnce(NoopSpan) -> R) -> R {
        f(NoopSpan)
    }
}

/// Span handle that ignores every operation.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

impl SpanHandle for NoopSpan {
    fn set_attributes(&mut self, _attributes: Attributes) {}

    fn set_status(&mut self, _status: SpanStatus) {}

    fn record_exception(&mut self, _error: &dyn Error) {}

    fn end(self) {}
}
