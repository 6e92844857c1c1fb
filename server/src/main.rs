//! Server entrypoint for lingua-tutor
//!
//! Wires together all layers using dependency injection: configuration,
//! the Groq generation adapter, the per-action use cases, and the HTTP
//! router.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tutor_application::{ConverseUseCase, GrammarUseCase, TextGenerator, VocabularyUseCase};
use tutor_infrastructure::{ConfigLoader, GroqGenerator};
use tutor_presentation::{AppState, Cli, serve};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting lingua-tutor");

    let config = ConfigLoader::load(cli.config.as_ref()).context("loading configuration")?;

    let Some(api_key) = config.api_key() else {
        bail!(
            "no generation API key configured; set [generator].api_key or the GROQ_API_KEY environment variable"
        );
    };

    // === Dependency Injection ===
    // Create the infrastructure adapter (Groq generation client)
    let generator: Arc<dyn TextGenerator> = Arc::new(GroqGenerator::new(
        config.generator.base_url.clone(),
        api_key,
        config.generator.model.clone(),
        config.request_timeout(),
    )?);

    let defaults = config.generation_defaults();
    let state = Arc::new(AppState {
        conversation: ConverseUseCase::new(generator.clone(), defaults),
        vocabulary: VocabularyUseCase::new(generator.clone(), defaults),
        grammar: GrammarUseCase::new(generator, defaults),
    });

    let bind = cli.bind.unwrap_or_else(|| config.bind_addr());

    serve(&bind, state).await.context("running HTTP server")?;

    Ok(())
}
