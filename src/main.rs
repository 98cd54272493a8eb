use anyhow::{Context, Result};
use fonparam_mcp::{Config, FonParamClient, FonParamServer, FonParamTools};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Terminate on any panic, in any task: no component holds state worth recovering.
fn install_fault_handler() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("uncaught fault, shutting down: {info}");
        std::process::exit(1);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fonparam_mcp=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    install_fault_handler();

    let config = Config::from_env().context("invalid configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        timeout = ?config.timeout,
        proxy = ?config.proxy,
        "fonparam-mcp starting"
    );

    let client = FonParamClient::new(config.client_options()).context("cannot build API client")?;
    let server = FonParamServer::new(FonParamTools::new(client.clone()));

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| tracing::error!("failed to start server: {e}"))?;

    if client.health_check().await {
        tracing::info!("API connection successful");
    } else {
        tracing::warn!("API connection test failed");
    }

    let cancel = service.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("interrupt received, closing transport");
            cancel.cancel();
        }
    });

    tracing::info!("server started");
    let reason = service.waiting().await?;
    tracing::info!(?reason, "server stopped");
    Ok(())
}
