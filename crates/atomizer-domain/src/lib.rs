//! Atomizer Domain Layer
//!
//! Core types shared by every other Atomizer crate: the [`Document`] that
//! flows through the pipeline, the metadata keys the extractor derives, and
//! the [`LlmProvider`](traits::LlmProvider) boundary to the remote model.
//!
//! ## Key Concepts
//!
//! - **Document**: a piece of text plus a free-form metadata map
//! - **Proposition**: a minimal, self-contained factual sentence derived from a document
//! - **Decontextualization**: rewriting a sentence so it reads correctly in isolation
//!
//! ## Architecture
//!
//! Only serialization crates are depended on here. HTTP clients, prompt
//! templates and parsing live in the infrastructure and application crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod metadata;
pub mod traits;

// Re-exports for convenience
pub use document::Document;
pub use metadata::Metadata;
pub use traits::{CompletionRequest, LlmProvider};
