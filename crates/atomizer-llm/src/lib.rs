//! Atomizer LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `atomizer-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GroqProvider`: Groq (or any OpenAI-compatible) chat completions API
//!
//! # Examples
//!
//! ```
//! use atomizer_domain::{CompletionRequest, LlmProvider};
//! use atomizer_llm::MockProvider;
//!
//! # tokio_test_block_on(async {
//! let provider = MockProvider::new(r#"["Hello from LLM!"]"#);
//! let request = CompletionRequest::new("any-model", "test prompt", 0.2);
//! let result = provider.complete(&request).await.unwrap();
//! assert_eq!(result, r#"["Hello from LLM!"]"#);
//! # });
//! # fn tokio_test_block_on<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
//! # }
//! ```

#![warn(missing_docs)]

pub mod groq;

use atomizer_domain::traits::LlmProvider as LlmProviderTrait;
use atomizer_domain::CompletionRequest;
use std::future::{self, Future};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

pub use groq::GroqProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response envelope carried no completion text
    #[error("Empty response from {provider}")]
    EmptyResponse {
        /// Provider that returned nothing
        provider: String,
    },

    /// Credential rejected by the service
    #[error("Unauthorized: credential rejected")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

impl From<serde_json::Error> for LlmError {
    fn from(e: serde_json::Error) -> Self {
        LlmError::InvalidResponse(e.to_string())
    }
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls. Rules
/// match on a fragment of the rendered prompt, which lets a test give each
/// input document its own response. Every request is recorded.
///
/// # Examples
///
/// ```
/// use atomizer_llm::MockProvider;
///
/// let mut provider = MockProvider::new("[]");
/// provider.add_response("Alice", r#"["Alice works at Acme."]"#);
/// provider.add_error("Bob");
/// assert_eq!(provider.call_count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    rules: Arc<Mutex<Vec<(String, MockReply)>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(response.into()))
    }

    /// Create a MockProvider that fails every request unless a rule matches
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Error(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            rules: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Respond with `response` when the prompt contains `fragment`.
    ///
    /// Rules are checked in insertion order; the first match wins.
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.push_rule(fragment.into(), MockReply::Text(response.into()));
    }

    /// Fail when the prompt contains `fragment`
    pub fn add_error(&mut self, fragment: impl Into<String>) {
        self.push_rule(fragment.into(), MockReply::Error("Mock error".to_string()));
    }

    fn push_rule(&mut self, fragment: String, reply: MockReply) {
        self.rules
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((fragment, reply));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Forget all recorded requests
    pub fn reset_call_count(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// All requests received so far, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request, if any
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    fn reply_for(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let rules = self.rules.lock().unwrap_or_else(PoisonError::into_inner);
        let reply = rules
            .iter()
            .find(|(fragment, _)| request.prompt.contains(fragment.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&self.default_reply);

        match reply {
            MockReply::Text(text) => Ok(text.clone()),
            MockReply::Error(message) => Err(LlmError::Other(message.clone())),
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("[]")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send {
        future::ready(self.reply_for(request))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
