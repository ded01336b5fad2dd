//! PARLAY DESK: dashboard API server.
//!
//! Entry point. Loads `.env` and configuration, initialises structured
//! logging, wires the odds client, parlay builder and history generator,
//! and serves the dashboard API until Ctrl+C.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use parlay_desk::config::AppConfig;
use parlay_desk::dashboard;
use parlay_desk::dashboard::routes::DashboardState;
use parlay_desk::data::odds_api::OddsApiClient;
use parlay_desk::history::HistoryGenerator;
use parlay_desk::strategy::edge::EdgeModel;
use parlay_desk::strategy::ParlayBuilder;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let config_path =
        std::env::var("PARLAY_DESK_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let cfg = AppConfig::load_or_default(&config_path)?;

    init_logging();

    info!(
        config = %config_path,
        sport = %cfg.odds.sport_key,
        regions = %cfg.odds.regions,
        seeded = cfg.model.seed.is_some(),
        "PARLAY DESK starting up"
    );

    let api_key = cfg.odds_api_key();
    if api_key.is_none() {
        warn!(
            env = %cfg.odds.api_key_env,
            "No odds API key configured; dashboard will serve sample parlays"
        );
    }

    let odds = OddsApiClient::new(&cfg.odds, api_key)?;
    let builder = ParlayBuilder::new(EdgeModel::new(&cfg.model));
    let history = HistoryGenerator::new(&cfg.history);
    let state = Arc::new(DashboardState::new(Arc::new(odds), builder, history));

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .with_context(|| {
            format!("Invalid listen address {}:{}", cfg.server.host, cfg.server.port)
        })?;

    dashboard::serve(state, addr, shutdown_signal()).await?;

    info!("PARLAY DESK shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("parlay_desk=info"));

    let json_logging = std::env::var("PARLAY_DESK_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
