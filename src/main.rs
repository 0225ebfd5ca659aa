use std::net::IpAddr;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use coaster_api::{app, config::AppConfig, AppState};

#[derive(Parser)]
#[command(name = "coaster-api")]
#[command(about = "In-memory roller coaster API with a password-gated admin page")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Address to bind (overrides COASTERS_HOST)")]
    host: Option<IpAddr>,

    #[arg(long, help = "Port to listen on (overrides COASTERS_PORT / PORT)")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so ADMIN_PASSWORD can live next to the binary
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting coaster API with {:?}", config);

    let app = app(AppState::from_config(&config));

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Server stopped; in-memory coasters discarded");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::warn!("CTRL+C received, shutting down");
}
