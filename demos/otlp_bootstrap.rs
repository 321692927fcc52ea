// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end OTLP export: bootstrap the pipeline, trace some calls, shut
//! down.
//!
//! Reads `OTEL_TRACES_EXPORTER_URL` from the environment (a `.env` file
//! works) and falls back to the collector default `http://localhost:4317`.
//!
//! Run with: `cargo run --example otlp_bootstrap --features otlp`

use anyhow::Result;
use dotenvy::dotenv;
use futures::FutureExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tracewrap::{bootstrap, Attributes, OtelTracerProvider, SpanOptions, TracedAsyncFn};

#[derive(Debug, thiserror::Error)]
#[error("payment declined: {0}")]
struct PaymentDeclined(String);

#[derive(Clone)]
struct PaymentGateway;

impl PaymentGateway {
    async fn charge(self, account: String, cents: u64) -> Result<String, PaymentDeclined> {
        if cents > 50_000 {
            return Err(PaymentDeclined(format!("{cents} over limit")));
        }
        Ok(format!("receipt-{account}-{cents}"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    bootstrap::init_tracing("tracewrap-demo", env!("CARGO_PKG_VERSION"))?;

    let charge = TracedAsyncFn::bind(
        &OtelTracerProvider,
        "PaymentGateway",
        "charge",
        SpanOptions::new()
            .with_name_fn(|_, (account, _): &(String, u64)| format!("charge-{account}"))
            .with_attributes(|_, (account, cents)| {
                Attributes::new()
                    .with("payment.account", account.clone())
                    .with("payment.cents", *cents as i64)
            }),
        |gateway: &PaymentGateway, (account, cents)| gateway.clone().charge(account, cents).boxed(),
    );

    let receipt = charge.call(&PaymentGateway, ("acct-1".to_string(), 1200)).await?;
    info!(%receipt, "charge succeeded");

    if let Err(error) = charge.call(&PaymentGateway, ("acct-2".to_string(), 99_000)).await {
        info!(%error, "charge declined; span carries the failure");
    }

    bootstrap::shutdown_tracing();

    Ok(())
}
