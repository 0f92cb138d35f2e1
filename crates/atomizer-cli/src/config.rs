//! Configuration resolution for the CLI.
//!
//! Settings come from an optional TOML file; command-line flags override it.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use atomizer_extractor::ExtractorConfig;
use std::fs;
use std::path::Path;

/// Build the extractor configuration from the config file and flags.
pub fn resolve(cli: &Cli) -> Result<ExtractorConfig> {
    let mut config = match &cli.config {
        Some(path) => load(path)?,
        None => ExtractorConfig::default(),
    };

    if let Some(model) = &cli.model {
        config.model = model.clone();
    }
    if let Some(limit) = cli.limit {
        config.max_documents = limit;
    }
    if cli.require_think_marker {
        config.require_reasoning_marker = true;
    }

    config.validate()?;
    Ok(config)
}

/// Load an extractor configuration file.
pub fn load(path: &Path) -> Result<ExtractorConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        CliError::Config(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(ExtractorConfig::from_toml(&contents)?)
}

/// Resolve the API key, treating an empty value as absent.
pub fn api_key(cli: &Cli) -> Result<String> {
    cli.api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .ok_or(CliError::MissingApiKey)
}
