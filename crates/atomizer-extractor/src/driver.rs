//! Bounded sequential driver over a batch of chunks

use crate::extractor::PropositionExtractor;
use crate::types::DriverReport;
use atomizer_domain::{Document, LlmProvider};
use std::fmt::Display;
use tracing::{debug, info};

/// Runs the extractor over the leading documents of a batch, one at a time
pub struct Driver<L>
where
    L: LlmProvider,
{
    extractor: PropositionExtractor<L>,
    max_documents: usize,
}

impl<L> Driver<L>
where
    L: LlmProvider,
    L::Error: Display,
{
    /// Create a driver bounded by the extractor's `max_documents`
    pub fn new(extractor: PropositionExtractor<L>) -> Self {
        let max_documents = extractor.config().max_documents;
        Self {
            extractor,
            max_documents,
        }
    }

    /// Override the number of leading documents processed
    pub fn with_limit(mut self, max_documents: usize) -> Self {
        self.max_documents = max_documents;
        self
    }

    /// Document limit in effect
    pub fn limit(&self) -> usize {
        self.max_documents
    }

    /// The wrapped extractor
    pub fn extractor(&self) -> &PropositionExtractor<L> {
        &self.extractor
    }

    /// Extract propositions from the leading documents and concatenate them
    pub async fn run(&self, documents: &[Document]) -> Vec<Document> {
        self.run_with_report(documents).await.documents
    }

    /// Like [`run`](Self::run), also counting successes and fallbacks
    pub async fn run_with_report(&self, documents: &[Document]) -> DriverReport {
        let batch = &documents[..documents.len().min(self.max_documents)];
        let mut report = DriverReport {
            skipped: documents.len() - batch.len(),
            ..DriverReport::default()
        };

        info!(
            "Extracting propositions from {} of {} documents",
            batch.len(),
            documents.len()
        );

        for (idx, document) in batch.iter().enumerate() {
            debug!("Processing document {}/{}", idx + 1, batch.len());

            let outcome = self.extractor.extract_outcome(document).await;
            report.processed += 1;
            if outcome.is_fallback() {
                report.fell_back += 1;
            } else {
                report.extracted += 1;
                report.propositions += outcome.len();
            }
            report.documents.extend(outcome.into_documents());
        }

        info!(
            "Extraction complete: {} extracted, {} fell back, {} propositions, {} skipped",
            report.extracted, report.fell_back, report.propositions, report.skipped
        );

        report
    }
}
