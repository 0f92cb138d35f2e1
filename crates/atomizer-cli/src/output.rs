//! Output formatting utilities.

use crate::cli::CliFormat;
use crate::error::Result;
use atomizer_domain::Document;

/// Renders documents for stdout.
pub struct Formatter {
    format: CliFormat,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat) -> Self {
        Self { format }
    }

    /// Render documents in the configured format, newline-terminated.
    pub fn documents(&self, documents: &[Document]) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(documents)?)),
            CliFormat::Jsonl => {
                let mut out = String::new();
                for doc in documents {
                    out.push_str(&serde_json::to_string(doc)?);
                    out.push('\n');
                }
                Ok(out)
            }
        }
    }
}
