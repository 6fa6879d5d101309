// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Job configuration loaded from environment variables.
//!
//! Loaded once at startup and passed by reference into every component
//! that needs it. Nothing here is mutated after `from_env` returns.

use chrono_tz::Tz;
use std::env;

const DEFAULT_TIMEZONE: &str = "Asia/Tokyo";
const DEFAULT_OURA_BASE_URL: &str = "https://api.ouraring.com/v2/usercollection";
const DEFAULT_LINE_BASE_URL: &str = "https://api.line.me/v2/bot";

/// Job configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Secrets ---
    /// Oura personal access token
    pub oura_api_token: String,
    /// LINE Messaging API channel access token
    pub line_api_token: String,
    /// LINE user ID that receives the report
    pub line_recipient_id: String,

    // --- Environment Variables (non-sensitive) ---
    /// Reference timezone for calendar-date windows
    pub timezone: Tz,
    /// Oura usercollection base URL
    pub oura_base_url: String,
    /// LINE bot API base URL
    pub line_base_url: String,
    /// Log the message instead of pushing it
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let timezone_name =
            env::var("REPORT_TIMEZONE").unwrap_or_else(|_| DEFAULT_TIMEZONE.to_string());

        Ok(Self {
            oura_api_token: required("OURA_API_TOKEN")?,
            line_api_token: required("LINE_API_TOKEN")?,
            line_recipient_id: required("TO_LINE_USER")?,
            timezone: parse_timezone(&timezone_name)?,
            oura_base_url: env::var("OURA_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_OURA_BASE_URL.to_string()),
            line_base_url: env::var("LINE_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_LINE_BASE_URL.to_string()),
            dry_run: env::var("DRY_RUN")
                .map(|v| parse_bool(&v))
                .unwrap_or(false),
        })
    }

    /// Fixed config for tests, pointed at the given mock server URLs.
    pub fn test_default(oura_base_url: &str, line_base_url: &str) -> Self {
        Self {
            oura_api_token: "test_oura_token".to_string(),
            line_api_token: "test_line_token".to_string(),
            line_recipient_id: "U_test_recipient".to_string(),
            timezone: chrono_tz::Asia::Tokyo,
            oura_base_url: oura_base_url.trim_end_matches('/').to_string(),
            line_base_url: line_base_url.trim_end_matches('/').to_string(),
            dry_run: false,
        }
    }
}

/// Read a required variable, rejecting unset and blank values alike.
fn required(name: &'static str) -> Result<String, ConfigError> {
    let value = env::var(name).map_err(|_| ConfigError::Missing(name))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(ConfigError::Missing(name));
    }
    Ok(value.to_string())
}

/// Resolve an IANA timezone name against the compiled-in tz database.
pub fn parse_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::InvalidTimezone(name.to_string()))
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Unknown timezone: {0}")]
    InvalidTimezone(String),
}
