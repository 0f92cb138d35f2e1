//! Groq Provider Implementation
//!
//! Talks to Groq's OpenAI-compatible chat completions endpoint. Any other
//! service speaking the same protocol works by overriding the base URL.
//!
//! # Examples
//!
//! ```no_run
//! use atomizer_llm::GroqProvider;
//!
//! let api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();
//! let provider = GroqProvider::new(api_key);
//! ```

use crate::LlmError;
use atomizer_domain::traits::LlmProvider as LlmProviderTrait;
use atomizer_domain::CompletionRequest;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

/// Default Groq API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Provider backed by an OpenAI-compatible chat completions API
///
/// One request is sent per completion; there is no retry.
#[derive(Clone)]
pub struct GroqProvider {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqProvider")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    /// Create a provider against the default Groq endpoint
    ///
    /// The key is passed through unchanged; it is not checked locally.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the provider at another OpenAI-compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Use a preconfigured HTTP client (proxies, timeouts, TLS settings)
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one chat completion request and return the first choice's text
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the service is unreachable
    /// - the credential is rejected (401/403)
    /// - the model does not exist (404)
    /// - the rate limit is hit (429)
    /// - the response envelope is malformed or carries no content
    pub async fn generate(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = ChatRequest {
            model: &request.model,
            messages: vec![ChatMessage {
                role: "user",
                content: &request.prompt,
            }],
            temperature: request.temperature,
            stream: false,
        };

        debug!(
            model = %request.model,
            prompt_chars = request.prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read body: {}", e)))?;

        match status {
            s if s.is_success() => parse_chat_response(&text),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(LlmError::Unauthorized)
            }
            reqwest::StatusCode::NOT_FOUND => Err(LlmError::ModelNotAvailable(request.model.clone())),
            reqwest::StatusCode::TOO_MANY_REQUESTS => Err(LlmError::RateLimitExceeded),
            s => {
                error!("Groq API error {s}: {text}");
                Err(LlmError::Communication(format!("HTTP {}", s)))
            }
        }
    }
}

/// Pull the completion text out of a chat completions response body
fn parse_chat_response(body: &str) -> Result<String, LlmError> {
    let response: ChatResponse = serde_json::from_str(body)?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::EmptyResponse {
            provider: "groq".to_string(),
        })
}

impl LlmProviderTrait for GroqProvider {
    type Error = LlmError;

    async fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.generate(request).await
    }

    fn name(&self) -> &str {
        "groq"
    }
}
