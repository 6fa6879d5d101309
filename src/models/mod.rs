// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Decoded Oura records.

pub mod activity;
pub mod page;
pub mod sleep;
pub mod sleep_score;

pub use activity::ActivityRecord;
pub use page::Page;
pub use sleep::SleepRecord;
pub use sleep_score::{SleepContributors, SleepScoreRecord};
