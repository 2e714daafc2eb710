// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Chat controller
//!
//! Sends the active conversation to the provider and appends the reply. The
//! controller holds no conversation state of its own; it reads and writes
//! through the [`SessionStore`] it is handed.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::{ApiError, ChatError};
use crate::llm::message::Role;
use crate::llm::provider::{CompletionRequest, LlmProvider};
use crate::session::SessionStore;

/// Where a send is in its lifecycle: `Idle → Sending → (Success | Failed) → Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TurnState {
    /// Ready to accept a message
    #[default]
    Idle,
    /// Waiting on the provider
    Sending,
}

/// How a send finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The provider's reply was appended
    Success,
    /// An error bubble was appended instead
    Failed,
}

/// Result of one send, for display after the fact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// Wall-clock time from just before the request to the appended reply
    pub elapsed: Duration,
}

impl TurnReport {
    pub fn is_success(&self) -> bool {
        self.outcome == TurnOutcome::Success
    }

    /// Caption shown under the transcript after the most recent send
    pub fn caption(&self) -> String {
        format!("Response time: {:.2}s", self.elapsed.as_secs_f64())
    }
}

/// Render a provider failure as chat text.
///
/// HTTP failures keep the status code and the raw response body verbatim.
pub fn failure_message(err: &ChatError) -> String {
    match err {
        ChatError::Api(ApiError::ServerError { status, body })
        | ChatError::Api(ApiError::InvalidResponse { status, body }) => {
            format!("⚠️ Error: {} - {}", status, body)
        }
        other => format!("⚠️ Error: {}", other),
    }
}

/// Stateless front door between the UI and the provider
#[derive(Clone)]
pub struct ChatController {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl ChatController {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Append `text` as a user message, send the whole active conversation and
    /// append the assistant's reply (or an error bubble).
    ///
    /// Provider failures never escape: they become an assistant message.
    pub async fn send_user_message(
        &self,
        store: &mut SessionStore,
        text: impl Into<String>,
    ) -> TurnReport {
        self.begin_turn(store, text);
        self.complete_turn(store).await
    }

    /// First half of [`Self::send_user_message`]: append the user message.
    ///
    /// Lets a UI draw the message and a busy indicator before awaiting
    /// [`Self::complete_turn`].
    pub fn begin_turn(&self, store: &mut SessionStore, text: impl Into<String>) {
        store.append_message(Role::User, text);
    }

    /// Second half of [`Self::send_user_message`]: send the active
    /// conversation and append the reply or an error bubble.
    pub async fn complete_turn(&self, store: &mut SessionStore) -> TurnReport {
        let started = Instant::now();
        let request = CompletionRequest::new(&self.model, store.active().messages.clone());
        let result = self.provider.complete(request).await;

        let outcome = match result {
            Ok(response) => {
                store.append_message(Role::Assistant, response.text);
                TurnOutcome::Success
            }
            Err(err) => {
                let status = match &err {
                    ChatError::Api(api) => api.status(),
                    _ => None,
                };
                tracing::warn!(?status, "Completion failed: {}", err);
                store.append_message(Role::Assistant, failure_message(&err));
                TurnOutcome::Failed
            }
        };
        let elapsed = started.elapsed();

        tracing::debug!(
            provider = self.provider.name(),
            conversation = %store.active().id,
            messages = store.active().len(),
            elapsed_ms = elapsed.as_millis() as u64,
            ?outcome,
            "Turn finished"
        );

        TurnReport { outcome, elapsed }
    }
}
