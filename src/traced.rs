// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span-wrapping method decorators.
//!
//! [`TracedFn`] and [`TracedAsyncFn`] wrap a callable together with its
//! [`SpanOptions`] into a replacement callable that manages a span around
//! every invocation and forwards the original outcome unchanged:
//!
//! 1. resolve the span name (configured name, or the method's own name),
//! 2. start an active span through the injected [`Tracer`],
//! 3. set the computed attributes on the span, once,
//! 4. run the original callable,
//! 5. on success set status `Ok`; on failure record the error and set
//!    status `Error` with the error's message,
//! 6. end the span, then hand the untouched `Result` back to the caller.
//!
//! For asynchronous methods the span is ended only after the future
//! settles, with the status recorded first. Callers of the wrapped method
//! observe exactly the behavior of the unwrapped method plus span emission.
//!
//! The tracer handle is acquired once per [`bind`], keyed by the enclosing
//! type's name, never per call.
//!
//! # Example
//!
//! ```rust
//! use tracewrap::{NoopTracerProvider, SpanOptions, TracedFn};
//!
//! struct Greeter;
//!
//! impl Greeter {
//!     fn greet(&self, id: &str) -> Result<String, std::convert::Infallible> {
//!         Ok(format!("hi-{id}"))
//!     }
//! }
//!
//! let greet = TracedFn::bind(
//!     &NoopTracerProvider,
//!     "Greeter",
//!     "greet",
//!     SpanOptions::new().with_name_fn(|_, (id,): &(String,)| format!("greet-{id}")),
//!     |greeter: &Greeter, (id,)| greeter.greet(&id),
//! );
//!
//! let reply = greet.call(&Greeter, ("7".to_string(),)).unwrap();
//! assert_eq!(reply, "hi-7");
//! ```
//!
//! [`bind`]: TracedFn::bind

use std::borrow::Cow;
use std::error::Error;

use futures::future::BoxFuture;
use tracing::debug;

use crate::options::SpanOptions;
use crate::tracer::{SpanHandle, Tracer, TracerProvider};
use crate::types::SpanStatus;

/// Records the outcome on the span and ends it.
///
/// Status is always set before the span ends, and the span always ends
/// before the result is surfaced to the caller.
fn finish_span<S, T, E>(mut span: S, result: &Result<T, E>)
where
    S: SpanHandle,
    E: Error,
{
    match result {
        Ok(_) => span.set_status(SpanStatus::Ok),
        Err(error) => {
            span.record_exception(error);
            span.set_status(SpanStatus::error(error.to_string()));
        }
    }
    span.end();
}

/// A synchronous method wrapped with span management.
///
/// `Ctx` is the owning instance type, `Args` the call arguments (typically
/// a tuple), and `Result<T, E>` the method's unchanged contract.
pub struct TracedFn<Tr, Ctx, Args, T, E> {
    tracer: Tr,
    method_name: Cow<'static, str>,
    options: SpanOptions<Ctx, Args>,
    method: Box<dyn Fn(&Ctx, Args) -> Result<T, E> + Send + Sync>,
}

impl<Tr, Ctx, Args, T, E> TracedFn<Tr, Ctx, Args, T, E>
where
    Tr: Tracer,
    E: Error,
{
    /// Wraps `method` with span management.
    ///
    /// The tracer for `scope` (conventionally the enclosing type's name) is
    /// acquired here, once, and reused across calls.
    pub fn bind<P, F>(
        provider: &P,
        scope: &str,
        method_name: impl Into<Cow<'static, str>>,
        options: SpanOptions<Ctx, Args>,
        method: F,
    ) -> Self
    where
        P: TracerProvider<Tracer = Tr>,
        F: Fn(&Ctx, Args) -> Result<T, E> + Send + Sync + 'static,
    {
        let method_name = method_name.into();
        debug!(scope, method = %method_name, "registered traced method");
        Self {
            tracer: provider.tracer(scope),
            method_name,
            options,
            method: Box::new(method),
        }
    }

    /// Invokes the wrapped method inside a span.
    ///
    /// Returns exactly what the unwrapped method would have returned; the
    /// span observes the outcome but never alters it.
    pub fn call(&self, instance: &Ctx, args: Args) -> Result<T, E> {
        let name = self.options.resolve_name(instance, &args, &self.method_name);
        self.tracer.start_active_span(&name, |mut span| {
            span.set_attributes(self.options.resolve_attributes(instance, &args));
            let result = (self.method)(instance, args);
            finish_span(span, &result);
            result
        })
    }

    /// The wrapped method's own name (the default span name).
    pub fn method_name(&self) -> &str {
        &self.method_name
    }
}

/// An asynchronous method wrapped with span management.
///
/// The stored callable returns a [`BoxFuture`] that owns its captures
/// (clone instance state needed across `.await`; service handles are
/// typically cheap to clone). The instance itself is still passed by
/// reference for the synchronous name/attribute derivation and the
/// callable's own synchronous prefix.
pub struct TracedAsyncFn<Tr, Ctx, Args, T, E> {
    tracer: Tr,
    method_name: Cow<'static, str>,
    options: SpanOptions<Ctx, Args>,
    method: Box<dyn Fn(&Ctx, Args) -> BoxFuture<'static, Result<T, E>> + Send + Sync>,
}

impl<Tr, Ctx, Args, T, E> TracedAsyncFn<Tr, Ctx, Args, T, E>
where
    Tr: Tracer,
    E: Error,
{
    /// Wraps the future-returning `method` with span management.
    ///
    /// As with [`TracedFn::bind`], the tracer for `scope` is acquired once
    /// here and reused for every call.
    pub fn bind<P, F>(
        provider: &P,
        scope: &str,
        method_name: impl Into<Cow<'static, str>>,
        options: SpanOptions<Ctx, Args>,
        method: F,
    ) -> Self
    where
        P: TracerProvider<Tracer = Tr>,
        F: Fn(&Ctx, Args) -> BoxFuture<'static, Result<T, E>> + Send + Sync + 'static,
    {
        let method_name = method_name.into();
        debug!(scope, method = %method_name, "registered traced async method");
        Self {
            tracer: provider.tracer(scope),
            method_name,
            options,
            method: Box::new(method),
        }
    }

    /// Invokes the wrapped method inside a span, awaiting its settlement.
    ///
    /// The span starts before the method's future runs and ends only after
    /// the future settles; the status is recorded before the span ends and
    /// before the caller observes the outcome. The settled `Result` is
    /// forwarded unchanged.
    pub async fn call(&self, instance: &Ctx, args: Args) -> Result<T, E> {
        let name = self.options.resolve_name(instance, &args, &self.method_name);
        // The handle and the not-yet-awaited future move out of the
        // callback together; the span must outlive the call's settlement.
        let (span, future) = self.tracer.start_active_span(&name, |mut span| {
            span.set_attributes(self.options.resolve_attributes(instance, &args));
            (span, (self.method)(instance, args))
        });
        let result = future.await;
        finish_span(span, &result);
        result
    }

    /// The wrapped method's own name (the default span name).
    pub fn method_name(&self) -> &str {
        &self.method_name
    }
}
