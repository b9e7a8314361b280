//! Axum page shells server
//!
//! Entry point for the server-rendered site.

use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use std::sync::Arc;

use axum_page_shells::config::AppConfig;
use axum_page_shells::server::start_server;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env (if present)
    let _ = dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Arc::new(AppConfig::load()?);

    info!(
        name: "layout.config.loaded",
        breakpoint = ?config.layout.breakpoint,
        sidebar_width = config.layout.sidebar_width,
        max_content_width = config.layout.max_content_width,
        "Layout configuration loaded"
    );

    start_server(config).await
}
