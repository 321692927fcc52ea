// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Core vocabulary types shared by the wrapper and tracer backends.
//!
//! These types are deliberately backend-free: the span wrapper produces
//! [`Attributes`] and [`SpanStatus`] values, and each tracer backend (see
//! [`crate::otel`]) converts them into its own representation. Keeping the
//! conversion at the backend boundary is what makes the tracer capability
//! injectable and mockable.

use std::borrow::Cow;
use std::fmt;

/// A single span attribute value.
///
/// Covers the OpenTelemetry scalar value space. Construct values through the
/// `From` implementations:
///
/// ```rust
/// use tracewrap::AttributeValue;
///
/// let flag: AttributeValue = true.into();
/// let count: AttributeValue = 42i64.into();
/// let name: AttributeValue = "checkout".into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// Boolean value
    Bool(bool),
    /// Signed 64-bit integer value
    I64(i64),
    /// 64-bit float value
    F64(f64),
    /// String value
    String(String),
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::I64(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::I64(value.into())
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        AttributeValue::I64(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::F64(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(v) => write!(f, "{v}"),
            AttributeValue::I64(v) => write!(f, "{v}"),
            AttributeValue::F64(v) => write!(f, "{v}"),
            AttributeValue::String(v) => write!(f, "{v}"),
        }
    }
}

/// An ordered collection of span attributes.
///
/// Insertion order is preserved so that backends and tests observe exactly
/// the mapping an attributes function produced. Duplicate keys are not
/// deduplicated here; the backend's own semantics apply.
///
/// # Example
///
/// ```rust
/// use tracewrap::Attributes;
///
/// let attrs = Attributes::new()
///     .with("user.id", "u-1337")
///     .with("retry", false);
/// assert_eq!(attrs.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Attributes(Vec<(Cow<'static, str>, AttributeValue)>);

impl Attributes {
    /// Creates an empty attribute collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an attribute, chainable.
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds an attribute in place.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl Into<AttributeValue>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the value for `key`, if present (first match wins).
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over key/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(Cow<'static, str>, AttributeValue)> {
        self.0.iter()
    }
}

impl IntoIterator for Attributes {
    type Item = (Cow<'static, str>, AttributeValue);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<Cow<'static, str>>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Terminal status of a span.
///
/// The wrapper sets exactly one terminal status per invocation: [`Ok`] on
/// success, [`Error`] with the failure's message otherwise. [`Unset`] exists
/// as the pre-terminal default and is never set by the wrapper itself.
///
/// [`Ok`]: SpanStatus::Ok
/// [`Error`]: SpanStatus::Error
/// [`Unset`]: SpanStatus::Unset
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SpanStatus {
    /// No terminal status recorded.
    #[default]
    Unset,
    /// The wrapped call completed successfully.
    Ok,
    /// The wrapped call failed.
    Error {
        /// Human-readable failure message (the error's `Display` output).
        message: String,
    },
}

impl SpanStatus {
    /// Creates an error status with the given message.
    pub fn error(message: impl Into<String>) -> Self {
        SpanStatus::Error {
            message: message.into(),
        }
    }

    /// Whether this is an error status.
    pub fn is_error(&self) -> bool {
        matches!(self, SpanStatus::Error { .. })
    }
}
