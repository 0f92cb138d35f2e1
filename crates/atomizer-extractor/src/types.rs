//! Result types for extraction

use crate::error::ExtractorError;
use atomizer_domain::Document;

/// Result of extracting propositions from one document
///
/// Callers that only want documents use [`into_documents`](Self::into_documents),
/// which flattens both variants into the same output shape.
#[derive(Debug)]
pub enum ExtractionOutcome {
    /// The response parsed; one document per proposition, in parse order
    Extracted(Vec<Document>),

    /// Extraction failed; the input is passed through unchanged
    Fallback {
        /// The unmodified input document
        original: Document,
        /// Why extraction failed
        reason: ExtractorError,
    },
}

impl ExtractionOutcome {
    /// Whether extraction failed and the input was passed through
    pub fn is_fallback(&self) -> bool {
        matches!(self, ExtractionOutcome::Fallback { .. })
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<&ExtractorError> {
        match self {
            ExtractionOutcome::Extracted(_) => None,
            ExtractionOutcome::Fallback { reason, .. } => Some(reason),
        }
    }

    /// Number of documents this outcome yields
    pub fn len(&self) -> usize {
        match self {
            ExtractionOutcome::Extracted(docs) => docs.len(),
            ExtractionOutcome::Fallback { .. } => 1,
        }
    }

    /// True only for a successful extraction of zero propositions
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flatten into output documents: the propositions, or `[original]`
    pub fn into_documents(self) -> Vec<Document> {
        match self {
            ExtractionOutcome::Extracted(docs) => docs,
            ExtractionOutcome::Fallback { original, .. } => vec![original],
        }
    }
}

/// Output of a driver run with per-run counts
#[derive(Debug, Default)]
pub struct DriverReport {
    /// All output documents, in input order then parse order
    pub documents: Vec<Document>,

    /// Input documents handed to the extractor
    pub processed: usize,

    /// Input documents beyond the limit that were not looked at
    pub skipped: usize,

    /// Inputs whose response parsed successfully
    pub extracted: usize,

    /// Inputs passed through after a failure
    pub fell_back: usize,

    /// Documents produced by successful extractions
    pub propositions: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_flattens_to_original() {
        let original = Document::new("chunk").with_metadata("start_index", 5);
        let outcome = ExtractionOutcome::Fallback {
            original: original.clone(),
            reason: ExtractorError::MissingReasoningMarker,
        };

        assert!(outcome.is_fallback());
        assert!(outcome.reason().is_some());
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.into_documents(), vec![original]);
    }

    #[test]
    fn test_extracted_empty() {
        let outcome = ExtractionOutcome::Extracted(Vec::new());
        assert!(!outcome.is_fallback());
        assert!(outcome.is_empty());
        assert!(outcome.into_documents().is_empty());
    }
}
