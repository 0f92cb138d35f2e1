//! Metadata keys and helpers
//!
//! Metadata is an open map of JSON values. The upstream splitter records the
//! character offset of each chunk under [`START_INDEX`]; the extractor adds
//! [`ORIGINAL_START_INDEX`] and [`PROPOSITION_INDEX`] to every proposition.

use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata attached to a [`Document`](crate::Document)
pub type Metadata = BTreeMap<String, Value>;

/// Character offset of a chunk within its source, set by the upstream splitter
pub const START_INDEX: &str = "start_index";

/// Copy of the source chunk's `start_index` (or 0) carried by each proposition
pub const ORIGINAL_START_INDEX: &str = "original_start_index";

/// Zero-based position of a proposition within its source chunk
pub const PROPOSITION_INDEX: &str = "proposition_index";

/// Resolve the `start_index` of a chunk, defaulting to 0 when absent.
///
/// The value is returned verbatim; a splitter that records offsets as strings
/// or floats keeps them that way.
///
/// # Examples
///
/// ```
/// use atomizer_domain::metadata::{start_index_or_default, Metadata, START_INDEX};
/// use serde_json::json;
///
/// let mut meta = Metadata::new();
/// assert_eq!(start_index_or_default(&meta), json!(0));
///
/// meta.insert(START_INDEX.to_string(), json!(512));
/// assert_eq!(start_index_or_default(&meta), json!(512));
/// ```
pub fn start_index_or_default(metadata: &Metadata) -> Value {
    metadata
        .get(START_INDEX)
        .cloned()
        .unwrap_or_else(|| Value::from(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_start_index_defaults_to_zero() {
        let meta = Metadata::new();
        assert_eq!(start_index_or_default(&meta), json!(0));
    }

    #[test]
    fn test_start_index_copied_verbatim() {
        let mut meta = Metadata::new();
        meta.insert(START_INDEX.to_string(), json!("1024"));
        assert_eq!(start_index_or_default(&meta), json!("1024"));
    }

    #[test]
    fn test_null_start_index_is_kept() {
        // An explicit null is present, so it is not replaced by the default
        let mut meta = Metadata::new();
        meta.insert(START_INDEX.to_string(), Value::Null);
        assert_eq!(start_index_or_default(&meta), Value::Null);
    }
}
