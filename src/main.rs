use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{error, info};

use senti_hotel::config::{Args, Config};
use senti_hotel::telemetry::{init_telemetry, shutdown_telemetry};
use senti_hotel::{router, AppState, ModelServerClient};

#[cfg(unix)]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::resolve(Args::parse())?;
    init_telemetry(&config.otel_endpoint, config.console)?;

    let model_client = ModelServerClient::new(config.model_server_url()?, config.upstream_timeout())
        .context("Failed to create model server client")?;
    info!("Forwarding predictions to {}", model_client.url());

    let app = router(AppState { model_client });

    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_telemetry();
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
