//! Configuration for the Extractor

use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "deepseek-r1-distill-llama-70b";

/// Low-randomness sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.2;

/// Number of leading documents the driver processes
pub const DEFAULT_MAX_DOCUMENTS: usize = 10;

/// Configuration for the Extractor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Target model identifier
    pub model: String,

    /// Sampling temperature
    pub temperature: f64,

    /// Maximum number of input documents the driver processes
    pub max_documents: usize,

    /// Treat a response without a `</think>` marker as a parse failure
    ///
    /// Off by default, so a marker-less answer is parsed as a whole. A chunk
    /// whose answer lacks the marker then yields propositions instead of
    /// being passed through; set this (or use [`strict`](Self::strict)) to
    /// pass such chunks through unchanged.
    pub require_reasoning_marker: bool,

    /// Maximum time for a single LLM call (seconds); `None` leaves the call
    /// unbounded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl ExtractorConfig {
    /// Get the request timeout as a Duration, if one is configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.model.trim().is_empty() {
            return Err(ExtractorError::Config("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ExtractorError::Config(format!(
                "temperature {} out of range [0.0, 2.0]",
                self.temperature
            )));
        }
        if self.max_documents == 0 {
            return Err(ExtractorError::Config(
                "max_documents must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == Some(0) {
            return Err(ExtractorError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_documents: DEFAULT_MAX_DOCUMENTS,
            require_reasoning_marker: false,
            request_timeout_secs: None,
        }
    }
}

impl ExtractorConfig {
    /// Strict preset: reasoning-model output must carry a `</think>` marker
    pub fn strict() -> Self {
        Self {
            require_reasoning_marker: true,
            ..Self::default()
        }
    }

    /// Unbounded preset: the driver processes every input document
    ///
    /// The cap is the largest value a TOML integer can hold, so the preset
    /// survives [`to_toml`](Self::to_toml).
    pub fn unbounded() -> Self {
        Self {
            max_documents: usize::try_from(i64::MAX).unwrap_or(usize::MAX),
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}
