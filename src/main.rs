//! priceadvisor process entry point

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::signal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use priceadvisor::services::rate_limiter::SWEEP_INTERVAL;
use priceadvisor::{build_router, AppState, OpenRouterClient, RateLimiter, Settings};

#[derive(Parser, Debug)]
#[command(name = "priceadvisor")]
#[command(about = "Pricing recommendation API with rule-based risk scoring")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (safe in prod too)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!(
            "priceadvisor={},tower_http=warn,reqwest=warn",
            args.log_level
        )))
        .with_target(false)
        .compact()
        .init();

    // Missing credential is fatal at startup, not a per-request error.
    let settings = Settings::load().context("configuration")?;

    let explainer = Arc::new(OpenRouterClient::new(
        settings.openrouter_api_key.clone(),
        settings.openrouter_model.clone(),
    ));

    let limiter = Arc::new(RateLimiter::default());
    let _sweep = limiter.spawn_eviction_sweep(SWEEP_INTERVAL);

    let state = AppState {
        settings: Arc::new(settings),
        explainer,
    };

    let addr: SocketAddr = format!("0.0.0.0:{}", args.port)
        .parse()
        .context("invalid port")?;

    let router = build_router(state, limiter);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!("🌐 priceadvisor listening on http://{addr}");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("🛑 priceadvisor stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_err() {
        tracing::error!("failed to install Ctrl+C handler");
    }
}
