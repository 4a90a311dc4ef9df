//! IlmAI chat server.
//!
//! Entry point: loads configuration and serves the chat UI.

use anyhow::Context;
use dotenvy::dotenv;
use mimalloc::MiMalloc;

use ilmai::config::AppConfig;
use ilmai::{server, telemetry};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    telemetry::init();

    let config = AppConfig::load().context("failed to load configuration")?;
    server::start_server(config).await
}
