//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// None of these escape [`PropositionExtractor::extract`](crate::PropositionExtractor::extract);
/// they are reported through [`ExtractionOutcome::Fallback`](crate::ExtractionOutcome::Fallback).
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Extraction timeout
    #[error("Extraction timeout after {0}s")]
    Timeout(u64),

    /// Reasoning marker required but not found in the response
    #[error("Response has no </think> marker")]
    MissingReasoningMarker,

    /// Response payload is not a JSON list of strings
    #[error("Invalid proposition format: {0}")]
    InvalidFormat(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
