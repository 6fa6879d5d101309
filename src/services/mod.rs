// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - API clients and report formatting.

pub mod line;
pub mod oura;
pub mod report;

pub use line::{LineClient, PushRequest, TextMessage};
pub use oura::OuraClient;
