//! Atomizer CLI - split document chunks into propositions.

use atomizer_cli::{config, input, Cli, Formatter};
use atomizer_extractor::{Driver, PropositionExtractor};
use atomizer_llm::GroqProvider;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; the key may come from the environment
    dotenvy::dotenv().ok();

    // Log to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> atomizer_cli::Result<()> {
    let cli = Cli::parse();

    let config = config::resolve(&cli)?;
    let api_key = config::api_key(&cli)?;
    let documents = input::load(cli.input.as_deref())?;

    info!(
        "Loaded {} documents, model {}, limit {}",
        documents.len(),
        config.model,
        config.max_documents
    );

    let provider = GroqProvider::new(api_key).with_base_url(cli.base_url.as_str());
    let extractor = PropositionExtractor::new(provider, config)?;
    let report = Driver::new(extractor).run_with_report(&documents).await;

    print!("{}", Formatter::new(cli.format).documents(&report.documents)?);

    info!(
        "{} documents out ({} propositions, {} passed through, {} not processed)",
        report.documents.len(),
        report.propositions,
        report.fell_back,
        report.skipped
    );

    Ok(())
}
