// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the report pipeline.
//!
//! Every variant is fatal: the job logs it and exits non-zero without
//! sending anything. An empty-but-valid upstream response is not an
//! error and never appears here.

use crate::config::ConfigError;

/// Pipeline error type.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {endpoint}")]
    Upstream { status: u16, endpoint: String },

    #[error("Failed to decode {category} response: {source}")]
    Decode {
        category: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ReportError {
    /// HTTP status of an upstream rejection, if that is what this is.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            ReportError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, ReportError>;
