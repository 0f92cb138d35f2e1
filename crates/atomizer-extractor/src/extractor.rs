//! Core PropositionExtractor implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::parser::parse_propositions;
use crate::prompt::PromptBuilder;
use crate::types::ExtractionOutcome;
use atomizer_domain::{CompletionRequest, Document, LlmProvider};
use std::fmt::Display;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Splits documents into propositions with one LLM call per document
pub struct PropositionExtractor<L>
where
    L: LlmProvider,
{
    llm_provider: L,
    config: ExtractorConfig,
}

impl<L> PropositionExtractor<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a new extractor, validating the configuration
    pub fn new(llm_provider: L, config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;
        Ok(Self {
            llm_provider,
            config,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Underlying LLM provider
    pub fn provider(&self) -> &L {
        &self.llm_provider
    }

    /// Extract propositions, falling back to `[document]` on any failure.
    ///
    /// Never fails. A single output equal to the input is a legitimate
    /// result; use [`extract_outcome`](Self::extract_outcome) to tell it
    /// apart from a one-proposition extraction.
    pub async fn extract(&self, document: &Document) -> Vec<Document> {
        self.extract_outcome(document).await.into_documents()
    }

    /// Extract propositions and report whether the fallback was taken
    pub async fn extract_outcome(&self, document: &Document) -> ExtractionOutcome {
        match self.try_extract(document).await {
            Ok(documents) => ExtractionOutcome::Extracted(documents),
            Err(reason) => {
                warn!(
                    provider = self.llm_provider.name(),
                    start_index = ?document.start_index(),
                    "Proposition extraction failed, passing chunk through: {}",
                    reason
                );
                ExtractionOutcome::Fallback {
                    original: document.clone(),
                    reason,
                }
            }
        }
    }

    /// Extract propositions, surfacing any failure as an error
    pub async fn try_extract(&self, document: &Document) -> Result<Vec<Document>, ExtractorError> {
        let prompt = PromptBuilder::new(&document.content).build();
        debug!("Prompt length: {} chars", prompt.len());

        let request = CompletionRequest::new(
            self.config.model.clone(),
            prompt,
            self.config.temperature,
        );

        let response = self.call_llm(&request).await?;
        debug!("LLM response length: {} chars", response.len());

        let propositions = parse_propositions(&response, self.config.require_reasoning_marker)?;
        debug!("Parsed {} propositions", propositions.len());

        Ok(propositions
            .into_iter()
            .enumerate()
            .map(|(index, proposition)| document.proposition(proposition, index))
            .collect())
    }

    /// Call the LLM provider, under the timeout if one is configured
    async fn call_llm(&self, request: &CompletionRequest) -> Result<String, ExtractorError> {
        let response = match self.config.request_timeout() {
            Some(limit) => timeout(limit, self.llm_provider.complete(request))
                .await
                .map_err(|_| ExtractorError::Timeout(limit.as_secs()))?,
            None => self.llm_provider.complete(request).await,
        };
        response.map_err(|e| ExtractorError::Llm(e.to_string()))
    }
}
