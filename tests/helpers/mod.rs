// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for tracewrap integration tests
//!
//! Provides a recording implementation of the tracer capability so tests
//! can assert on the exact, ordered sequence of span interactions a wrapped
//! call produces, without a real tracing backend.

use std::error::Error;
use std::sync::{Arc, Mutex};

use tracewrap::{Attributes, SpanHandle, SpanStatus, Tracer, TracerProvider};

/// One observable interaction with a span, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub enum SpanEvent {
    /// A span was started with this name.
    Started { name: String },
    /// `set_attributes` was called with this mapping.
    AttributesSet(Attributes),
    /// `set_status` was called.
    StatusSet(SpanStatus),
    /// `record_exception` was called; the error's message is kept.
    ExceptionRecorded { message: String },
    /// The span was ended.
    Ended,
}

/// Tracer provider that records every interaction for later assertions.
///
/// All tracers handed out by one provider append to a single ordered event
/// log, and every `tracer(scope)` acquisition is recorded too, so tests can
/// verify both per-call span lifecycles and registration-time behavior.
///
/// # Example
///
/// ```rust,ignore
/// let provider = RecordingTracerProvider::new();
/// let wrapped = TracedFn::bind(&provider, "Svc", "op", SpanOptions::new(), ...);
/// wrapped.call(&svc, args)?;
/// assert_eq!(provider.span_names(), vec!["op"]);
/// assert!(provider.ended());
/// ```
#[derive(Clone, Default)]
pub struct RecordingTracerProvider {
    scopes: Arc<Mutex<Vec<String>>>,
    events: Arc<Mutex<Vec<SpanEvent>>>,
}

impl RecordingTracerProvider {
    /// Creates a provider with an empty event log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope names passed to `tracer()`, in acquisition order.
    #[allow(dead_code)]
    pub fn scopes(&self) -> Vec<String> {
        self.scopes.lock().unwrap().clone()
    }

    /// The full ordered event log.
    pub fn events(&self) -> Vec<SpanEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Names of all started spans, in start order.
    #[allow(dead_code)]
    pub fn span_names(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpanEvent::Started { name } => Some(name),
                _ => None,
            })
            .collect()
    }

    /// The most recently set status, if any.
    #[allow(dead_code)]
    pub fn status(&self) -> Option<SpanStatus> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                SpanEvent::StatusSet(status) => Some(status),
                _ => None,
            })
    }

    /// The most recently set attribute mapping, if any.
    #[allow(dead_code)]
    pub fn attributes(&self) -> Option<Attributes> {
        self.events()
            .into_iter()
            .rev()
            .find_map(|event| match event {
                SpanEvent::AttributesSet(attributes) => Some(attributes),
                _ => None,
            })
    }

    /// Messages of all recorded exceptions, in record order.
    #[allow(dead_code)]
    pub fn exception_messages(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                SpanEvent::ExceptionRecorded { message } => Some(message),
                _ => None,
            })
            .collect()
    }

    /// Whether at least one span has ended.
    #[allow(dead_code)]
    pub fn ended(&self) -> bool {
        self.events().contains(&SpanEvent::Ended)
    }

    /// Index of the first event matching `predicate`, if any.
    #[allow(dead_code)]
    pub fn position(&self, predicate: impl Fn(&SpanEvent) -> bool) -> Option<usize> {
        self.events().iter().position(predicate)
    }
}

impl TracerProvider for RecordingTracerProvider {
    type Tracer = RecordingTracer;

    fn tracer(&self, scope: &str) -> RecordingTracer {
        self.scopes.lock().unwrap().push(scope.to_owned());
        RecordingTracer {
            events: Arc::clone(&self.events),
        }
    }
}

/// Tracer that appends to its provider's event log.
pub struct RecordingTracer {
    events: Arc<Mutex<Vec<SpanEvent>>>,
}

impl Tracer for RecordingTracer {
    type Span = RecordingSpan;

    fn start_active_span<R>(&self, name: &str, f: impl FnOnce(RecordingSpan) -> R) -> R {
        self.events.lock().unwrap().push(SpanEvent::Started {
            name: name.to_owned(),
        });
        f(RecordingSpan {
            events: Arc::clone(&self.events),
        })
    }
}

/// Span handle that appends every operation to the shared event log.
pub struct RecordingSpan {
    events: Arc<Mutex<Vec<SpanEvent>>>,
}

impl SpanHandle for RecordingSpan {
    fn set_attributes(&mut self, attributes: Attributes) {
        self.events
            .lock()
            .unwrap()
            .push(SpanEvent::AttributesSet(attributes));
    }

    fn set_status(&mut self, status: SpanStatus) {
        self.events.lock().unwrap().push(SpanEvent::StatusSet(status));
    }

    fn record_exception(&mut self, error: &dyn Error) {
        self.events.lock().unwrap().push(SpanEvent::ExceptionRecorded {
            message: error.to_string(),
        });
    }

    fn end(self) {
        self.events.lock().unwrap().push(SpanEvent::Ended);
    }
}

/// Error type for exercising failure paths in tests.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("{0}")]
pub struct TestError(pub String);

impl TestError {
    /// Creates a test error with the given message.
    #[allow(dead_code)]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
