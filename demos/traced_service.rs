// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wrapping a service's sync and async methods with spans.
//!
//! Spans resolve through the global OpenTelemetry registry; without an
//! installed SDK they are no-ops, so this demo runs standalone. Pair it
//! with the `otlp_bootstrap` demo to see the spans exported.
//!
//! Run with: `cargo run --example traced_service`

use anyhow::Result;
use futures::FutureExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tracewrap::{Attributes, OtelTracerProvider, SpanOptions, TracedAsyncFn, TracedFn};

#[derive(Debug, thiserror::Error)]
#[error("order {0} not found")]
struct OrderNotFound(u64);

#[derive(Clone)]
struct OrderService {
    region: String,
}

impl OrderService {
    fn total(&self, order_id: u64, quantity: u32) -> Result<u64, OrderNotFound> {
        if order_id == 0 {
            return Err(OrderNotFound(order_id));
        }
        Ok(u64::from(quantity) * 100)
    }

    async fn lookup(self, order_id: u64) -> Result<String, OrderNotFound> {
        if order_id == 0 {
            return Err(OrderNotFound(order_id));
        }
        Ok(format!("order-{order_id}@{}", self.region))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let provider = OtelTracerProvider;
    let service = OrderService {
        region: "eu-west".to_string(),
    };

    let total = TracedFn::bind(
        &provider,
        "OrderService",
        "total",
        SpanOptions::new()
            .with_name_fn(|_, (order_id, _): &(u64, u32)| format!("total-{order_id}"))
            .with_attributes(|service: &OrderService, (order_id, quantity)| {
                Attributes::new()
                    .with("order.region", service.region.clone())
                    .with("order.id", *order_id as i64)
                    .with("order.quantity", *quantity)
            }),
        |service, (order_id, quantity)| service.total(order_id, quantity),
    );

    let lookup = TracedAsyncFn::bind(
        &provider,
        "OrderService",
        "lookup",
        SpanOptions::new().with_attributes(|_, (order_id,): &(u64,)| {
            Attributes::new().with("order.id", *order_id as i64)
        }),
        |service: &OrderService, (order_id,)| service.clone().lookup(order_id).boxed(),
    );

    let amount = total.call(&service, (7, 3))?;
    info!(amount, "computed order total");

    let found = lookup.call(&service, (7,)).await?;
    info!(%found, "looked up order");

    // Failures are recorded on the span and forwarded unchanged.
    if let Err(error) = lookup.call(&service, (0,)).await {
        info!(%error, "lookup failed as expected");
    }

    Ok(())
}
