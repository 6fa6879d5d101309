// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Oura-to-LINE daily report job
//!
//! Intended to be run once a day by an external scheduler. Exits zero when
//! either the report or the no-data warning was delivered.

use anyhow::Context;
use oura_line_reporter::{config::Config, Outcome, Pipeline};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured JSON logging
    init_logging();

    match run().await {
        Ok(outcome) => {
            tracing::info!(outcome = ?outcome, "Daily report finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            let message = format!("{:#}", err);
            tracing::error!(error = %message, "Daily report failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<Outcome> {
    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        timezone = %config.timezone,
        dry_run = config.dry_run,
        "Configuration loaded"
    );

    let pipeline = Pipeline::new(&config).context("Failed to initialize API clients")?;
    let outcome = pipeline.run().await?;
    Ok(outcome)
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("oura_line_reporter=debug,info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();
}
