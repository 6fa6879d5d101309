// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Oura-to-LINE daily report
//!
//! This crate fetches the previous day's activity, sleep and sleep score
//! from the Oura Ring API and pushes a formatted summary to a LINE user.

pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod services;
pub mod time_utils;

pub use pipeline::{Outcome, Pipeline};
