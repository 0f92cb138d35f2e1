//! CLI argument parsing.

use atomizer_llm::groq::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

/// Atomizer - split document chunks into atomic propositions with an LLM.
#[derive(Debug, Parser)]
#[command(name = "atomizer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Documents to process: a JSON array or JSON Lines file ("-" or omitted for stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Extractor configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model identifier (overrides the config file)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Number of leading documents to process (overrides the config file)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: CliFormat,

    /// Fail extraction when the response has no </think> marker
    #[arg(long)]
    pub require_think_marker: bool,

    /// OpenAI-compatible API base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// API key for the generation service
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Pretty-printed JSON array (default)
    Json,
    /// One JSON document per line
    Jsonl,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["atomizer", "--api-key", "k"]);
        assert!(cli.input.is_none());
        assert_eq!(cli.format, CliFormat::Json);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert!(!cli.require_think_marker);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "atomizer",
            "-i",
            "chunks.jsonl",
            "-m",
            "llama-3.3-70b-versatile",
            "-l",
            "3",
            "-f",
            "jsonl",
            "--require-think-marker",
            "--base-url",
            "http://localhost:8000/v1",
            "--api-key",
            "secret",
        ]);
        assert_eq!(cli.input, Some(PathBuf::from("chunks.jsonl")));
        assert_eq!(cli.model.as_deref(), Some("llama-3.3-70b-versatile"));
        assert_eq!(cli.limit, Some(3));
        assert_eq!(cli.format, CliFormat::Jsonl);
        assert!(cli.require_think_marker);
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_invalid_format_rejected() {
        let result = Cli::try_parse_from(["atomizer", "--format", "yaml"]);
        assert!(result.is_err());
    }
}
