// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Oura Ring v2 API client.
//!
//! Handles:
//! - Fetching one usercollection resource for a date window
//! - Decoding the paginated `{ data, next_token }` envelope
//!
//! Only the first page is read. No retries.

use crate::error::{ReportError, Result};
use crate::models::{ActivityRecord, Page, SleepRecord, SleepScoreRecord};
use crate::time_utils::DateWindow;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Per-request timeout for Oura calls.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub const DAILY_ACTIVITY: &str = "daily_activity";
pub const SLEEP: &str = "sleep";
pub const DAILY_SLEEP: &str = "daily_sleep";

/// Oura API client bound to one access token.
#[derive(Clone)]
pub struct OuraClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl OuraClient {
    /// Create a client against `base_url` (the usercollection root).
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|source| ReportError::Transport {
                endpoint: base_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Fetch daily activity for the window.
    pub async fn daily_activity(&self, window: &DateWindow) -> Result<Page<ActivityRecord>> {
        let body = self.fetch(DAILY_ACTIVITY, window).await?;
        decode(DAILY_ACTIVITY, &body)
    }

    /// Fetch sleep sessions for the window.
    pub async fn sleep(&self, window: &DateWindow) -> Result<Page<SleepRecord>> {
        let body = self.fetch(SLEEP, window).await?;
        decode(SLEEP, &body)
    }

    /// Fetch daily sleep scores for the window.
    pub async fn daily_sleep(&self, window: &DateWindow) -> Result<Page<SleepScoreRecord>> {
        let body = self.fetch(DAILY_SLEEP, window).await?;
        decode(DAILY_SLEEP, &body)
    }

    /// GET one resource and return the raw body.
    ///
    /// Anything other than 200 is an upstream error; the body is discarded.
    pub async fn fetch(&self, resource: &str, window: &DateWindow) -> Result<Vec<u8>> {
        let url = format!("{}/{}", self.base_url, resource);

        tracing::debug!(
            endpoint = %url,
            start_date = %window.start_date,
            end_date = %window.end_date,
            "Fetching Oura data"
        );

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[
                ("start_date", window.start_date.as_str()),
                ("end_date", window.end_date.as_str()),
            ])
            .send()
            .await
            .map_err(|source| ReportError::Transport {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(endpoint = %url, status = status.as_u16(), "Oura API rejected request");
            return Err(ReportError::Upstream {
                status: status.as_u16(),
                endpoint: url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ReportError::Transport {
                endpoint: url.clone(),
                source,
            })?;

        Ok(body.to_vec())
    }
}

/// Decode a raw Oura response body into a page of records.
pub fn decode<T: DeserializeOwned>(category: &'static str, body: &[u8]) -> Result<Page<T>> {
    let page: Page<T> =
        serde_json::from_slice(body).map_err(|source| ReportError::Decode { category, source })?;

    tracing::debug!(category, count = page.data.len(), "Decoded Oura response");
    if page.has_more() {
        tracing::debug!(category, "Response has further pages; only the first is used");
    }

    Ok(page)
}
