// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! DeepSeek API provider implementation
//!
//! Implements the LlmProvider trait for the DeepSeek chat-completions API.
//! The wire format is OpenAI-compatible, so the same provider works against
//! any compatible endpoint through [`DeepSeekProvider::with_base_url`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ChatError, Result};
use crate::llm::message::Message;
use crate::llm::provider::{CompletionRequest, CompletionResponse, LlmProvider};

pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/v1/chat/completions";

/// DeepSeek provider (OpenAI-compatible chat completions)
pub struct DeepSeekProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl DeepSeekProvider {
    /// Create a new DeepSeek provider
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEEPSEEK_API_URL)
    }

    /// Create with a custom endpoint URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Bound every request by `timeout` instead of the transport default
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = Client::builder().timeout(timeout).build()?;
        Ok(self)
    }

    /// Endpoint this provider posts to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Convert internal messages to the wire format
    fn convert_messages(messages: &[Message]) -> Vec<WireMessage<'_>> {
        messages
            .iter()
            .map(|m| WireMessage {
                role: m.role.as_str(),
                content: &m.content,
            })
            .collect()
    }

    /// Extract the first choice's text from a 200 body
    fn parse_success(status: u16, body: String) -> Result<(String, Option<String>)> {
        let parsed = match serde_json::from_str::<WireResponse>(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::debug!("Unparseable completion body: {}", e);
                return Err(ApiError::InvalidResponse { status, body }.into());
            }
        };

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match text {
            Some(text) => Ok((text, parsed.model)),
            None => Err(ApiError::InvalidResponse { status, body }.into()),
        }
    }
}

fn transport_error(err: reqwest::Error) -> ChatError {
    if err.is_timeout() {
        ApiError::Timeout.into()
    } else {
        ApiError::Network(err.to_string()).into()
    }
}

#[async_trait]
impl LlmProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "deepseek"
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        let body = WireRequest {
            model: &request.model,
            messages: Self::convert_messages(&request.messages),
        };

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            "Sending completion request"
        );

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", &self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(transport_error)?;

        if status != 200 {
            tracing::warn!(status, "Completion request failed");
            return Err(ApiError::ServerError { status, body: text }.into());
        }

        let (text, model) = Self::parse_success(status, text)?;
        Ok(CompletionResponse {
            model: model.unwrap_or(request.model),
            text,
        })
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    model: Option<String>,
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
}
