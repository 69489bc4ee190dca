#![warn(missing_docs, clippy::pedantic, clippy::perf)]
#![doc = include_str!("../README.md")]

use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod bot;
mod handler;
mod hooks;
mod type_map;
mod structures;
mod groups;

/// Environment variable overriding where the credential file is looked up.
const KEYS_PATH_VAR: &str = "STEAMCORD_KEYS";

/// Fallback credential path, next to the process.
const DEFAULT_KEYS_PATH: &str = "confidential-keys.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up .env overrides before anything reads the environment
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let keys_path = std::env::var(KEYS_PATH_VAR)
        .map_or_else(|_| PathBuf::from(DEFAULT_KEYS_PATH), PathBuf::from);
    info!("reading credentials from {}", keys_path.display());

    let mut client = bot::init(keys_path)
        .await
        .context("failed to initialize the bot")?;
    client
        .start()
        .await
        .context("the gateway connection ended with an error")?;
    Ok(())
}
