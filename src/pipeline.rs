// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily report pipeline.
//!
//! Handles the core workflow:
//! 1. Compute date windows in the reference timezone
//! 2. Fetch activity, sleep and sleep score from Oura
//! 3. Decode and pick the last record of each category
//! 4. Compose the report, or fall back if any category is empty
//! 5. Push the result to LINE
//!
//! Any fetch, decode or push failure aborts the run before anything else
//! is sent. Empty data is not a failure.

use crate::config::Config;
use crate::error::Result;
use crate::services::report::{self, FALLBACK_MESSAGE};
use crate::services::{LineClient, OuraClient};
use crate::time_utils::DateWindows;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A full report was composed and delivered.
    ReportSent,
    /// At least one category was empty; the fallback warning was delivered.
    FallbackSent,
}

/// Fetch, compose and deliver one daily report.
pub struct Pipeline {
    oura: OuraClient,
    line: LineClient,
    recipient_id: String,
    timezone: Tz,
    dry_run: bool,
}

impl Pipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            oura: OuraClient::new(config.oura_base_url.clone(), config.oura_api_token.clone())?,
            line: LineClient::new(config.line_base_url.clone(), config.line_api_token.clone()),
            recipient_id: config.line_recipient_id.clone(),
            timezone: config.timezone,
            dry_run: config.dry_run,
        })
    }

    /// Run the pipeline for the current instant.
    pub async fn run(&self) -> Result<Outcome> {
        self.run_at(Utc::now()).await
    }

    /// Run the pipeline as if it were `now`.
    pub async fn run_at(&self, now: DateTime<Utc>) -> Result<Outcome> {
        let windows = DateWindows::for_instant(now, self.timezone);
        tracing::info!(
            start_date = %windows.activity.start_date,
            end_date = %windows.activity.end_date,
            timezone = %self.timezone,
            "Starting daily report"
        );

        // The three fetches are independent. try_join! drops the others on
        // the first error, so nothing is sent if any of them fails.
        let (activity, sleep, sleep_score) = tokio::try_join!(
            self.oura.daily_activity(&windows.activity),
            self.oura.sleep(&windows.sleep),
            self.oura.daily_sleep(&windows.sleep_score),
        )?;

        let message = match (
            activity.into_authoritative(),
            sleep.into_authoritative(),
            sleep_score.into_authoritative(),
        ) {
            (Some(activity), Some(sleep), Some(sleep_score)) => {
                Some(report::compose(&activity, &sleep, &sleep_score))
            }
            (activity, sleep, sleep_score) => {
                tracing::warn!(
                    activity = activity.is_some(),
                    sleep = sleep.is_some(),
                    sleep_score = sleep_score.is_some(),
                    "Oura returned no data for at least one category"
                );
                None
            }
        };

        match message {
            Some(text) => {
                self.deliver(&text).await?;
                Ok(Outcome::ReportSent)
            }
            None => {
                self.deliver(FALLBACK_MESSAGE).await?;
                Ok(Outcome::FallbackSent)
            }
        }
    }

    async fn deliver(&self, text: &str) -> Result<()> {
        if self.dry_run {
            tracing::info!(to = %self.recipient_id, text, "Dry run; not sending");
            return Ok(());
        }
        self.line.push_text(&self.recipient_id, text).await
    }
}
