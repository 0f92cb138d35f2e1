//! Document module - the unit of data flowing through Atomizer

use crate::metadata::{self, Metadata};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of text with its metadata
///
/// Input documents are chunks produced by an upstream splitter; output
/// documents are propositions derived from one of those chunks. Both are
/// plain values and are never mutated once handed to the extractor.
///
/// # Examples
///
/// ```
/// use atomizer_domain::Document;
/// use serde_json::json;
///
/// let chunk = Document::new("Alice founded Acme. She lives in Oslo.")
///     .with_metadata("start_index", json!(120));
///
/// let prop = chunk.proposition("Alice founded Acme.", 0);
/// assert_eq!(prop.metadata["original_start_index"], json!(120));
/// assert_eq!(prop.metadata["proposition_index"], json!(0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Text content
    #[serde(alias = "page_content")]
    pub content: String,

    /// Free-form metadata, keys unique
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with empty metadata
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create a document with the given metadata
    pub fn with_metadata_map(content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }

    /// Add (or replace) a metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// The `start_index` recorded by the splitter, if any
    pub fn start_index(&self) -> Option<&Value> {
        self.metadata.get(metadata::START_INDEX)
    }

    /// Derive a proposition document from this chunk.
    ///
    /// All metadata is inherited; `original_start_index` and
    /// `proposition_index` are then set, overwriting any existing values
    /// under those keys.
    pub fn proposition(&self, content: impl Into<String>, index: usize) -> Document {
        let mut meta = self.metadata.clone();
        meta.insert(
            metadata::ORIGINAL_START_INDEX.to_string(),
            metadata::start_index_or_default(&self.metadata),
        );
        meta.insert(metadata::PROPOSITION_INDEX.to_string(), Value::from(index));

        Document {
            content: content.into(),
            metadata: meta,
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: original_start_index always mirrors start_index
        #[test]
        fn test_original_start_index_property(k: i64, index in 0usize..1000) {
            let doc = Document::new("chunk").with_metadata("start_index", k);
            let prop = doc.proposition("p", index);

            prop_assert_eq!(&prop.metadata["original_start_index"], &Value::from(k));
            prop_assert_eq!(&prop.metadata["proposition_index"], &Value::from(index));
        }

        /// Property: every pre-existing key except the derived ones survives verbatim
        #[test]
        fn test_inherited_keys_preserved(
            entries in proptest::collection::btree_map("[a-z]{1,8}", any::<i32>(), 0..8)
        ) {
            let meta: Metadata = entries
                .iter()
                .map(|(k, v)| (k.clone(), Value::from(*v)))
                .collect();
            let doc = Document::with_metadata_map("chunk", meta.clone());
            let prop = doc.proposition("p", 0);

            for (key, value) in &meta {
                if key == metadata::ORIGINAL_START_INDEX || key == metadata::PROPOSITION_INDEX {
                    continue;
                }
                prop_assert_eq!(prop.metadata.get(key), Some(value));
            }
        }
    }
}
