// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! LINE Messaging API client for push messages.

use crate::error::{ReportError, Result};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Push endpoint, relative to the bot API root.
const PUSH_PATH: &str = "message/push";

/// Body of `POST /message/push`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushRequest {
    pub to: String,
    pub messages: Vec<TextMessage>,
}

impl PushRequest {
    /// A push carrying exactly one text message.
    pub fn text(to: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            messages: vec![TextMessage::new(text)],
        }
    }
}

/// A LINE text message object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl TextMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: text.into(),
        }
    }
}

/// LINE client bound to one channel access token.
///
/// Uses the default reqwest client settings; there is no explicit timeout.
#[derive(Clone)]
pub struct LineClient {
    http: reqwest::Client,
    base_url: String,
    channel_token: String,
}

impl LineClient {
    pub fn new(base_url: impl Into<String>, channel_token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            channel_token: channel_token.into(),
        }
    }

    /// Push one text message to one user. Sent once, never retried.
    pub async fn push_text(&self, to: &str, text: &str) -> Result<()> {
        let url = format!("{}/{}", self.base_url, PUSH_PATH);
        let body = PushRequest::text(to, text);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.channel_token)
            .json(&body)
            .send()
            .await
            .map_err(|source| ReportError::Transport {
                endpoint: url.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let detail = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %detail, "LINE push rejected");
            return Err(ReportError::Upstream {
                status: status.as_u16(),
                endpoint: url,
            });
        }

        tracing::info!("LINE push message sent");
        Ok(())
    }
}
