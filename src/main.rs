use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use haley_portfolio::config::{Cli, Command, ExportConfig, ServeConfig};
use haley_portfolio::{build_router, export, Site};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}

async fn run_serve(site: Site, config: ServeConfig) -> anyhow::Result<()> {
    let app = build_router(Arc::new(site), &config.static_dir);
    let listener = TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    tracing::info!(
        addr = %config.bind,
        static_dir = %config.static_dir.display(),
        "listening"
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn run_export(site: Site, config: ExportConfig) -> anyhow::Result<()> {
    let static_dir = (!config.no_assets).then_some(config.static_dir.as_path());
    export::export_site(&site, &config.out, static_dir).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let site = Site::load().context("loading site content")?;

    match cli.command {
        Command::Serve(config) => run_serve(site, config).await,
        Command::Export(config) => run_export(site, config).await,
    }
}
