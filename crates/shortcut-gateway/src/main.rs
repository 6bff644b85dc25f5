mod app;
mod cli;
mod error;
mod handlers;
mod model;
mod state;

use crate::app::App;
use crate::cli::CLI;
use crate::state::AppState;
use clap::Parser;
use shortcut_generator::RandomCodeGenerator;
use shortcut_shortener::{DigestConfig, ShortenerService};
use shortcut_storage::InMemoryRepository;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = CLI::try_parse()?;

    let digest = DigestConfig::builder()
        .random_bytes(config.random_bytes)
        .length(config.code_length)
        .max_attempts(config.max_attempts)
        .prefix(config.prefix.clone())
        .build();
    let generator = RandomCodeGenerator::new(digest.random_bytes, digest.length);
    let shortener = ShortenerService::new(InMemoryRepository::new(), generator, digest);
    let state = AppState::new(Arc::new(shortener));

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(
        listen_addr = %listener.local_addr()?,
        prefix = %config.prefix,
        code_length = config.code_length,
        max_attempts = config.max_attempts,
        "starting gateway server"
    );

    axum::serve(listener, App::router(state)).await?;

    Ok(())
}
