// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Oura daily activity record.

use serde::{Deserialize, Serialize};

use super::page::nullable;

/// One day's activity summary from `daily_activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Activity score (0-100)
    #[serde(rename = "score", default, deserialize_with = "nullable")]
    pub active_score: u32,
    /// Total calories burned (kcal)
    #[serde(default, deserialize_with = "nullable")]
    pub total_calories: u32,
    /// Seconds the ring was not worn
    #[serde(rename = "non_wear_time", default, deserialize_with = "nullable")]
    pub non_wear_seconds: u32,
}
