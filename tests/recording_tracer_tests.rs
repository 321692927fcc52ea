// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Tests for the RecordingTracer test helper
//!
//! Validates that the mock infrastructure works correctly for testing:
//! everything else in the suite asserts against what this helper records.

mod helpers;

use helpers::{RecordingTracerProvider, SpanEvent, TestError};
use tracewrap::{Attributes, SpanHandle, SpanStatus, Tracer, TracerProvider};

#[test]
fn test_recording_provider_tracks_scope_acquisitions() {
    let provider = RecordingTracerProvider::new();

    provider.tracer("First");
    provider.tracer("Second");

    assert_eq!(provider.scopes(), vec!["First", "Second"]);
}

#[test]
fn test_recording_span_captures_events_in_order() {
    let provider = RecordingTracerProvider::new();
    let tracer = provider.tracer("Scope");

    let result = tracer.start_active_span("op", |mut span| {
        span.set_attributes(Attributes::new().with("k", 1i64));
        span.set_status(SpanStatus::Ok);
        span.end();
        "done"
    });

    assert_eq!(result, "done");
    assert_eq!(
        provider.events(),
        vec![
            SpanEvent::Started { name: "op".into() },
            SpanEvent::AttributesSet(Attributes::new().with("k", 1i64)),
            SpanEvent::StatusSet(SpanStatus::Ok),
            SpanEvent::Ended,
        ]
    );
}

#[test]
fn test_recording_span_captures_exception_message() {
    let provider = RecordingTracerProvider::new();
    let tracer = provider.tracer("Scope");

    tracer.start_active_span("op", |mut span| {
        span.record_exception(&TestError::new("kaput"));
        span.set_status(SpanStatus::error("kaput"));
        span.end();
    });

    assert_eq!(provider.exception_messages(), vec!["kaput"]);
    assert_eq!(provider.status(), Some(SpanStatus::error("kaput")));
}

#[test]
fn test_multiple_spans_accumulate_in_one_log() {
    let provider = RecordingTracerProvider::new();
    let tracer = provider.tracer("Scope");

    tracer.start_active_span("first", |span| span.end());
    tracer.start_active_span("second", |span| span.end());

    assert_eq!(provider.span_names(), vec!["first", "second"]);
}

#[test]
fn test_span_handle_can_outlive_callback() {
    // The async wrapper relies on moving the handle out of the callback and
    // finishing the span later.
    let provider = RecordingTracerProvider::new();
    let tracer = provider.tracer("Scope");

    let mut span = tracer.start_active_span("op", |span| span);
    assert!(!provider.ended());

    span.set_status(SpanStatus::Ok);
    span.end();
    assert!(provider.ended());
}

#[test]
fn test_position_finds_first_matching_event() {
    let provider = RecordingTracerProvider::new();
    let tracer = provider.tracer("Scope");

    tracer.start_active_span("op", |mut span| {
        span.set_status(SpanStatus::Ok);
        span.end();
    });

    let status_at = provider
        .position(|event| matches!(event, SpanEvent::StatusSet(_)))
        .unwrap();
    let end_at = provider.position(|event| *event == SpanEvent::Ended).unwrap();
    assert!(status_at < end_at);
}
