//! Parse LLM output into proposition strings
//!
//! Reasoning models prefix their answer with a `<think>...</think>` segment.
//! Everything up to and including the first closing marker is dropped; the
//! rest must be a JSON array of strings. Nothing else is accepted.

use crate::error::ExtractorError;

/// Marker closing a model's reasoning segment
pub const REASONING_MARKER: &str = "</think>";

/// Parse a raw model response into propositions
pub fn parse_propositions(
    response: &str,
    require_marker: bool,
) -> Result<Vec<String>, ExtractorError> {
    let answer = strip_reasoning(response, require_marker)?;
    let payload = unwrap_code_fence(answer)?;

    serde_json::from_str::<Vec<String>>(payload).map_err(|e| {
        ExtractorError::InvalidFormat(format!("expected a JSON list of strings: {}", e))
    })
}

/// Drop the reasoning segment and trim the remainder
fn strip_reasoning(response: &str, require_marker: bool) -> Result<&str, ExtractorError> {
    match response.split_once(REASONING_MARKER) {
        Some((_, answer)) => Ok(answer.trim()),
        None if require_marker => Err(ExtractorError::MissingReasoningMarker),
        None => Ok(response.trim()),
    }
}

/// Unwrap a payload fenced in a markdown code block
fn unwrap_code_fence(payload: &str) -> Result<&str, ExtractorError> {
    let Some(rest) = payload.strip_prefix("```") else {
        return Ok(payload);
    };

    // Skip the info string ("json") on the opening line
    let body = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => return Err(ExtractorError::InvalidFormat("Empty code block".to_string())),
    };

    body.trim_end()
        .strip_suffix("```")
        .map(str::trim)
        .ok_or_else(|| ExtractorError::InvalidFormat("Unterminated code block".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_list() {
        let props = parse_propositions(r#"["Alice works at Acme.", "Acme is in Oslo."]"#, false)
            .unwrap();
        assert_eq!(props, vec!["Alice works at Acme.", "Acme is in Oslo."]);
    }

    #[test]
    fn test_parse_after_reasoning_segment() {
        let response = "<think>\nThe user wants propositions. [\"not this\"]\n</think>\n\n[\"Alice works at Acme.\"]\n";
        let props = parse_propositions(response, true).unwrap();
        assert_eq!(props, vec!["Alice works at Acme."]);
    }

    #[test]
    fn test_only_first_marker_is_split() {
        let response = r#"<think>a</think>["mentions </think> literally"]"#;
        let props = parse_propositions(response, false).unwrap();
        assert_eq!(props, vec!["mentions </think> literally"]);
    }

    #[test]
    fn test_missing_marker_allowed_by_default() {
        let props = parse_propositions(r#"  ["x"]  "#, false).unwrap();
        assert_eq!(props, vec!["x"]);
    }

    #[test]
    fn test_missing_marker_rejected_when_required() {
        let result = parse_propositions(r#"["x"]"#, true);
        assert!(matches!(result, Err(ExtractorError::MissingReasoningMarker)));
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(parse_propositions("</think>[]", true).unwrap().is_empty());
    }

    #[test]
    fn test_parse_fenced_list() {
        let response = "</think>\n```json\n[\"Bob lives in Seattle.\"]\n```";
        let props = parse_propositions(response, true).unwrap();
        assert_eq!(props, vec!["Bob lives in Seattle."]);
    }

    #[test]
    fn test_unterminated_fence() {
        let result = parse_propositions("```json\n[\"a\"]", false);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_reject_non_json() {
        assert!(parse_propositions("This is not JSON", false).is_err());
    }

    #[test]
    fn test_reject_python_literal() {
        // Single-quoted strings are a Python literal, not JSON
        assert!(parse_propositions("['a', 'b']", false).is_err());
    }

    #[test]
    fn test_reject_code() {
        let result = parse_propositions("__import__('os').system('rm -rf /')", false);
        assert!(matches!(result, Err(ExtractorError::InvalidFormat(_))));
    }

    #[test]
    fn test_reject_non_string_elements() {
        assert!(parse_propositions(r#"["a", 1]"#, false).is_err());
        assert!(parse_propositions(r#"["a", null]"#, false).is_err());
        assert!(parse_propositions(r#"[["nested"]]"#, false).is_err());
    }

    #[test]
    fn test_reject_object() {
        assert!(parse_propositions(r#"{"propositions": ["a"]}"#, false).is_err());
    }

    #[test]
    fn test_reject_trailing_text() {
        assert!(parse_propositions(r#"["a"] Hope this helps!"#, false).is_err());
    }

    #[test]
    fn test_reject_empty_answer() {
        assert!(parse_propositions("<think>only thoughts</think>   ", true).is_err());
    }
}
