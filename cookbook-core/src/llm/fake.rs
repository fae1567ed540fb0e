//! Fake LLM provider for testing.
//!
//! Replies are scripted by matching a substring of the user payload, so
//! tests run without network access or API costs. Every request is
//! recorded for later inspection.

use super::{CompletionRequest, LlmError, LlmProvider};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct FakeProvider {
    /// (payload substring, reply) pairs, checked in insertion order.
    responses: Vec<(String, String)>,
    /// Reply when no pattern matches.
    default_response: Option<String>,
    /// When set, every call fails with this error.
    failure: Option<LlmError>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl FakeProvider {
    /// A provider with nothing scripted; every call fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply with `response` to payloads containing `payload_contains`.
    pub fn with_response(payload_contains: &str, response: &str) -> Self {
        Self::new().and_response(payload_contains, response)
    }

    pub fn and_response(mut self, payload_contains: &str, response: &str) -> Self {
        self.responses
            .push((payload_contains.to_lowercase(), response.to_string()));
        self
    }

    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// A provider whose every call fails with `error`.
    pub fn failing(error: LlmError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.recorded().clone()
    }

    fn recorded(&self) -> MutexGuard<'_, Vec<CompletionRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.recorded().push(request.clone());

        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        let payload: String = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        for (pattern, response) in &self.responses {
            if payload.contains(pattern.as_str()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: no response configured for payload (first 100 chars): {}",
                payload.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
