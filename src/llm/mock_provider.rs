// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Mock LLM provider for testing
//!
//! Provides a scripted implementation of the LlmProvider trait that records
//! every request, so controller and TUI tests run without network access.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ApiError, Result};
use crate::llm::provider::{CompletionRequest, CompletionResponse, LlmProvider};

/// A mock LLM provider for testing
#[derive(Clone)]
pub struct MockProvider {
    /// Provider name
    name: String,
    /// Scripted outcomes, consumed in order; the last one repeats
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    /// Call counter
    call_count: Arc<AtomicUsize>,
    /// Recorded requests
    recorded_requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A pre-configured outcome for the mock provider
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MockOutcome {
    /// 200 with a single choice carrying this text
    Text(String),
    /// Non-200 status with a raw body
    Status { status: u16, body: String },
    /// 200 with a body that has no usable choice
    Malformed(String),
    /// The request never reached the server
    Network(String),
}

impl Default for MockOutcome {
    fn default() -> Self {
        MockOutcome::Text("Mock response".to_string())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => {
            tracing::warn!("Mock provider lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            name: "mock".to_string(),
            outcomes: Arc::new(Mutex::new(vec![MockOutcome::default()])),
            call_count: Arc::new(AtomicUsize::new(0)),
            recorded_requests: Arc::new(Mutex::new(vec![])),
        }
    }

    /// Set the text response
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.with_outcomes(vec![MockOutcome::Text(text.into())])
    }

    /// Queue multiple text responses (returned in order)
    pub fn with_responses(self, texts: Vec<String>) -> Self {
        self.with_outcomes(texts.into_iter().map(MockOutcome::Text).collect())
    }

    /// Respond with a non-200 status
    pub fn with_status(self, status: u16, body: impl Into<String>) -> Self {
        self.with_outcomes(vec![MockOutcome::Status {
            status,
            body: body.into(),
        }])
    }

    /// Queue arbitrary outcomes (returned in order)
    pub fn with_outcomes(self, outcomes: Vec<MockOutcome>) -> Self {
        {
            let mut guard = lock(&self.outcomes);
            *guard = outcomes;
        }
        self
    }

    /// Get the number of times complete() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get all recorded requests
    pub fn recorded_requests(&self) -> Vec<CompletionRequest> {
        lock(&self.recorded_requests).clone()
    }

    /// Get the last request made
    pub fn last_request(&self) -> Option<CompletionRequest> {
        lock(&self.recorded_requests).last().cloned()
    }

    fn next_outcome(&self) -> MockOutcome {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);
        let outcomes = lock(&self.outcomes);
        if outcomes.is_empty() {
            MockOutcome::default()
        } else {
            outcomes[count.min(outcomes.len() - 1)].clone()
        }
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse> {
        lock(&self.recorded_requests).push(request.clone());

        match self.next_outcome() {
            MockOutcome::Text(text) => Ok(CompletionResponse {
                model: request.model,
                text,
            }),
            MockOutcome::Status { status, body } => {
                Err(ApiError::ServerError { status, body }.into())
            }
            MockOutcome::Malformed(body) => {
                Err(ApiError::InvalidResponse { status: 200, body }.into())
            }
            MockOutcome::Network(message) => Err(ApiError::Network(message).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;
    use crate::llm::message::Message;

    fn request() -> CompletionRequest {
        CompletionRequest::new("mock-model", vec![Message::user("hi")])
    }

    #[tokio::test]
    async fn test_default_response() {
        let provider = MockProvider::new();
        let response = provider.complete(request()).await.unwrap();
        assert_eq!(response.text, "Mock response");
        assert_eq!(response.model, "mock-model");
    }

    #[tokio::test]
    async fn test_responses_in_order_then_repeat_last() {
        let provider =
            MockProvider::new().with_responses(vec!["one".to_string(), "two".to_string()]);
        assert_eq!(provider.complete(request()).await.unwrap().text, "one");
        assert_eq!(provider.complete(request()).await.unwrap().text, "two");
        assert_eq!(provider.complete(request()).await.unwrap().text, "two");
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_status_outcome() {
        let provider = MockProvider::new().with_status(503, "busy");
        let err = provider.complete(request()).await.unwrap_err();
        match err {
            ChatError::Api(ApiError::ServerError { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "busy");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_records_requests() {
        let provider = MockProvider::new();
        provider.complete(request()).await.unwrap();
        assert_eq!(provider.recorded_requests().len(), 1);
        assert_eq!(
            provider.last_request().unwrap().messages,
            vec![Message::user("hi")]
        );
    }
}
