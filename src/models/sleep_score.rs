// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Oura daily sleep score record.

use serde::{Deserialize, Serialize};

use super::page::nullable;

/// One day's sleep score from `daily_sleep`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepScoreRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub score: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub contributors: SleepContributors,
}

/// Contributor scores (each 0-100) behind the overall sleep score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepContributors {
    #[serde(default, deserialize_with = "nullable")]
    pub deep_sleep: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub rem_sleep: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub restfulness: u32,
    #[serde(default, deserialize_with = "nullable")]
    pub total_sleep: u32,
}
