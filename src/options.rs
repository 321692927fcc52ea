// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Registration-time span configuration.
//!
//! [`SpanOptions`] is attached to a method when it is wrapped and controls
//! how the span's name and attributes are derived from each call. Both
//! derivation functions receive the owning instance (`&Ctx`) and the call's
//! arguments (`&Args`) explicitly, so they can read instance state the same
//! way the method itself can.
//!
//! # Example
//!
//! ```rust
//! use tracewrap::{Attributes, SpanOptions};
//!
//! struct Greeter {
//!     tenant: String,
//! }
//!
//! let options: SpanOptions<Greeter, (String,)> = SpanOptions::new()
//!     .with_name_fn(|greeter: &Greeter, (id,): &(String,)| format!("{}-greet-{id}", greeter.tenant))
//!     .with_attributes(|_, (id,): &(String,)| Attributes::new().with("greet.id", id.clone()));
//! ```

use std::borrow::Cow;

use crate::types::Attributes;

type NameFn<Ctx, Args> = Box<dyn Fn(&Ctx, &Args) -> String + Send + Sync>;
type AttributesFn<Ctx, Args> = Box<dyn Fn(&Ctx, &Args) -> Attributes + Send + Sync>;

/// How a span's name is derived.
pub enum SpanName<Ctx, Args> {
    /// A fixed name used verbatim. An empty string falls back to the
    /// method's own name.
    Fixed(Cow<'static, str>),
    /// A name computed per call from the instance and arguments. An empty
    /// result falls back to the method's own name.
    Computed(NameFn<Ctx, Args>),
}

impl<Ctx, Args> std::fmt::Debug for SpanName<Ctx, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanName::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            SpanName::Computed(_) => f.debug_tuple("Computed").field(&"<fn>").finish(),
        }
    }
}

/// Optional per-method span configuration.
///
/// Absent fields fall back to defaults: the span is named after the method,
/// and its attribute mapping is empty.
pub struct SpanOptions<Ctx, Args> {
    name: Option<SpanName<Ctx, Args>>,
    attributes: Option<AttributesFn<Ctx, Args>>,
}

impl<Ctx, Args> Default for SpanOptions<Ctx, Args> {
    fn default() -> Self {
        Self {
            name: None,
            attributes: None,
        }
    }
}

impl<Ctx, Args> std::fmt::Debug for SpanOptions<Ctx, Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanOptions")
            .field("name", &self.name)
            .field("attributes", &self.attributes.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl<Ctx, Args> SpanOptions<Ctx, Args> {
    /// Creates an empty configuration (method-name span, no attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `name` verbatim as the span name.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(SpanName::Fixed(name.into()));
        self
    }

    /// Derives the span name per call from the instance and arguments.
    pub fn with_name_fn<F>(mut self, name_fn: F) -> Self
    where
        F: Fn(&Ctx, &Args) -> String + Send + Sync + 'static,
    {
        self.name = Some(SpanName::Computed(Box::new(name_fn)));
        self
    }

    /// Derives the span's attribute mapping per call from the instance and
    /// arguments. The returned mapping is set on the span in a single
    /// operation, replacing rather than merging.
    pub fn with_attributes<F>(mut self, attributes_fn: F) -> Self
    where
        F: Fn(&Ctx, &Args) -> Attributes + Send + Sync + 'static,
    {
        self.attributes = Some(Box::new(attributes_fn));
        self
    }

    /// Resolves the span name for one call.
    ///
    /// Fallback rules: no configured name, a fixed empty string, or a
    /// computed empty string all resolve to `method_name`.
    pub(crate) fn resolve_name(&self, instance: &Ctx, args: &Args, method_name: &str) -> String {
        let configured = match &self.name {
            None => None,
            Some(SpanName::Fixed(name)) => Some(name.to_string()),
            Some(SpanName::Computed(name_fn)) => Some(name_fn(instance, args)),
        };
        match configured {
            Some(name) if !name.is_empty() => name,
            _ => method_name.to_owned(),
        }
    }

    /// Resolves the attribute mapping for one call (empty when
    /// unconfigured).
    pub(crate) fn resolve_attributes(&self, instance: &Ctx, args: &Args) -> Attributes {
        match &self.attributes {
            Some(attributes_fn) => attributes_fn(instance, args),
            None => Attributes::new(),
        }
    }
}
