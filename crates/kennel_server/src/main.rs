use anyhow::{Context, Result};
use clap::Parser;
use kennel_server::{build_router, AppState, KennelConfig};
use kennel_store::Catalog;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "kennel", version, about = "Serve site themes and button presets")]
struct Cli {
    /// Configuration file
    #[arg(short, long, default_value = "kennel.toml")]
    config: PathBuf,

    /// Listen address, overrides the configuration
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = KennelConfig::load_or_default(&cli.config)?;
    config.apply_env();
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match &config.store.snapshot_path {
        Some(path) => Catalog::open(path)
            .await
            .with_context(|| format!("Failed to open catalog at {}", path.display()))?,
        None => Catalog::new(),
    };
    if config.store.seed_defaults {
        catalog.seed_defaults().await?;
    }

    let state = AppState::new(Arc::new(catalog)).with_admin_token(config.server.admin_token);
    if state.admin_token.is_none() {
        tracing::warn!("no admin token configured, admin API is unauthenticated");
    }

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    tracing::info!(addr = %listener.local_addr()?, "kennel listening");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("kennel stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
