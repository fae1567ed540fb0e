//! LLM provider abstraction used by the AI recommendation strategy.
//!
//! Providers turn a [`CompletionRequest`] into the model's raw text reply.
//! Interpreting that text is the caller's job.

mod claude;
mod fake;

pub use claude::{ClaudeProvider, DEFAULT_TIMEOUT};
pub use fake::FakeProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Clone, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out after {0} seconds")]
    Timeout(u64),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Role of a message. Requests are single-turn, so only the user speaks;
/// the system instruction travels separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single-shot completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
}

/// Trait for LLM providers.
///
/// Implementations hold no per-call state and are shared across requests.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send the request and return the model's text reply.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;

    /// Provider name (e.g., "claude", "fake").
    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str;
}
