//! Loading input documents.

use crate::error::{CliError, Result};
use atomizer_domain::Document;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read documents from a file, or stdin when `path` is `None` or `-`.
pub fn load(path: Option<&Path>) -> Result<Vec<Document>> {
    let data = match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)?,
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    parse_documents(&data)
}

/// Parse a JSON array of documents, or JSON Lines with one document per line.
pub fn parse_documents(data: &str) -> Result<Vec<Document>> {
    let trimmed = data.trim_start();
    if trimmed.is_empty() {
        return Err(CliError::InvalidInput("No documents provided".to_string()));
    }

    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    data.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|e| {
                CliError::InvalidInput(format!("line {}: {}", idx + 1, e))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json_array() {
        let docs = parse_documents(
            r#"[{"content": "a", "metadata": {"start_index": 0}}, {"page_content": "b"}]"#,
        )
        .unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].metadata["start_index"], json!(0));
        assert_eq!(docs[1].content, "b");
    }

    #[test]
    fn test_parse_json_lines() {
        let data = "{\"content\": \"a\"}\n\n{\"content\": \"b\", \"metadata\": {\"start_index\": 9}}\n";
        let docs = parse_documents(data).unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1].metadata["start_index"], json!(9));
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let data = "{\"content\": \"a\"}\n{broken\n";
        match parse_documents(data) {
            Err(CliError::InvalidInput(msg)) => assert!(msg.starts_with("line 2")),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            parse_documents("  \n"),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"[{{"content": "from file"}}]"#).unwrap();

        let docs = load(Some(file.path())).unwrap();
        assert_eq!(docs[0].content, "from file");
    }
}
