// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Oura sleep session record.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::page::nullable;

/// A single sleep session from `sleep`. A day may have several.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepRecord {
    /// Bedtime start, in the ring's local offset
    pub bedtime_start: DateTime<FixedOffset>,
    /// Bedtime end, in the ring's local offset
    pub bedtime_end: DateTime<FixedOffset>,
    #[serde(rename = "deep_sleep_duration", default, deserialize_with = "nullable")]
    pub deep_sleep_seconds: u32,
    #[serde(rename = "light_sleep_duration", default, deserialize_with = "nullable")]
    pub light_sleep_seconds: u32,
    #[serde(rename = "rem_sleep_duration", default, deserialize_with = "nullable")]
    pub rem_sleep_seconds: u32,
    #[serde(rename = "total_sleep_duration", default, deserialize_with = "nullable")]
    pub total_sleep_seconds: u32,
    /// Sleep efficiency percentage (0-100)
    #[serde(rename = "efficiency", default, deserialize_with = "nullable")]
    pub efficiency_percent: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub low_battery_alert: bool,
}
