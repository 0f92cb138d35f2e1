//! Trait definitions for external interactions
//!
//! These traits define the boundary between the extraction logic and the
//! remote text-generation service. Implementations live in `atomizer-llm`.

use std::future::Future;

/// A single text-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Target model identifier
    pub model: String,

    /// Fully rendered prompt
    pub prompt: String,

    /// Sampling temperature
    pub temperature: f64,
}

impl CompletionRequest {
    /// Create a new request
    pub fn new(model: impl Into<String>, prompt: impl Into<String>, temperature: f64) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// Trait for LLM provider operations
///
/// Implemented by the infrastructure layer (atomizer-llm). The credential, if
/// any, belongs to the implementation; callers only see text in, text out.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a completion for the request and return the raw response text
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Human-readable provider name, used in logs
    fn name(&self) -> &str;
}
