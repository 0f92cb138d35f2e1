//! Atomizer Extractor
//!
//! Decomposes document chunks into atomic, decontextualized propositions
//! using an LLM.
//!
//! # Overview
//!
//! Each chunk is rendered into a fixed decomposition prompt and sent to the
//! model in a single request. The answer (after any `</think>` reasoning
//! segment) must be a JSON list of strings; each string becomes a new
//! [`Document`](atomizer_domain::Document) that inherits the chunk's metadata
//! plus `original_start_index` and `proposition_index`.
//!
//! # Architecture
//!
//! ```text
//! Chunks → Driver → PropositionExtractor → LLM → Propositions
//! ```
//!
//! If anything goes wrong for a chunk (transport, timeout, unparseable
//! answer) the chunk itself is passed through, so one bad response never
//! aborts a batch.
//!
//! # Example Usage
//!
//! ```no_run
//! use atomizer_domain::Document;
//! use atomizer_extractor::{Driver, ExtractorConfig, PropositionExtractor};
//! use atomizer_llm::GroqProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = GroqProvider::new(std::env::var("GROQ_API_KEY")?);
//! let extractor = PropositionExtractor::new(llm, ExtractorConfig::default())?;
//! let driver = Driver::new(extractor);
//!
//! let chunks = vec![
//!     Document::new("Alice founded Acme. She lives in Oslo.").with_metadata("start_index", 0),
//! ];
//! let propositions = driver.run(&chunks).await;
//!
//! for doc in &propositions {
//!     println!("{} {:?}", doc.content, doc.metadata);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod config;
mod driver;
mod error;
mod extractor;
mod parser;
mod prompt;
mod types;


pub use config::{ExtractorConfig, DEFAULT_MAX_DOCUMENTS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
pub use driver::Driver;
pub use error::ExtractorError;
pub use extractor::PropositionExtractor;
pub use parser::{parse_propositions, REASONING_MARKER};
pub use prompt::PromptBuilder;
pub use types::{DriverReport, ExtractionOutcome};
