// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! LLM Provider trait and related types
//!
//! Defines the abstraction layer between the chat controller and the
//! completion backend.

use async_trait::async_trait;

use crate::error::Result;
use crate::llm::message::Message;

/// Main trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "deepseek")
    fn name(&self) -> &str;

    /// Non-streaming completion over the full conversation context.
    ///
    /// Failures carry the HTTP status and raw body where one exists
    /// (see [`crate::error::ApiError`]).
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse>;
}

/// Request for completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    /// Model to use
    pub model: String,

    /// Messages in the conversation, oldest first
    pub messages: Vec<Message>,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
        }
    }
}

/// Response from a completion request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    /// Model reported by the provider (falls back to the requested model)
    pub model: String,

    /// Text of the first choice
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_request_new() {
        let request = CompletionRequest::new("deepseek-chat", vec![Message::user("hi")]);
        assert_eq!(request.model, "deepseek-chat");
        assert_eq!(request.messages.len(), 1);
    }
}
