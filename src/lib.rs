//! Declarative method tracing: wrap sync and async calls in spans.
//!
//! `tracewrap` turns a method into a traced method: a span starts when the
//! call begins, the call's attributes are computed from the instance and
//! arguments, the outcome (return value or error) is recorded as the span's
//! status, and the span ends when the call (synchronous or asynchronous)
//! completes. The wrapped method's contract is untouched: callers receive
//! exactly the value or error the unwrapped method would have produced.
//!
//! Spans are created through an injected tracer capability
//! ([`TracerProvider`] / [`Tracer`] / [`SpanHandle`]); the shipped backend
//! ([`OtelTracerProvider`]) targets the global OpenTelemetry registry, and
//! the `otlp` feature adds an OTLP pipeline bootstrap.
//!
//! ```rust
//! use tracewrap::{Attributes, OtelTracerProvider, SpanOptions, TracedFn};
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
//!     &OtelTracerProvider,
//!     "Greeter",
//!     "greet",
//!     SpanOptions::new()
//!         .with_name_fn(|_, (id,): &(String,)| format!("greet-{id}"))
//!         .with_attributes(|_, (id,)| Attributes::new().with("greet.id", id.clone())),
//!     |greeter: &Greeter, (id,)| greeter.greet(&id),
//! );
//!
//! assert_eq!(greet.call(&Greeter, ("7".into(),)).unwrap(), "hi-7");
//! ```

#[cfg(feature = "otlp")]
pub mod bootstrap;
pub mod otel;
mod options;
mod traced;
mod tracer;
mod types;

pub use options::{SpanName, SpanOptions};
pub use otel::OtelTracerProvider;
pub use traced::{TracedAsyncFn, TracedFn};
pub use tracer::{NoopSpan, NoopTracer, NoopTracerProvider, SpanHandle, Tracer, TracerProvider};
pub use types::{AttributeValue, Attributes, SpanStatus};
