use anyhow::Context;
use tokio::signal;
use tracing::info;

use timer_server::{config::Config, server};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("{:#}", err);
    }
}

async fn run() -> anyhow::Result<()> {
    info!("Starting cube timer server...");

    let config = Config::from_env().context("Failed to load configuration")?;
    let running = server::start(&config)
        .await
        .context("Failed to start server")?;

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        running.local_addr()
    );
    wait_for_shutdown_signal().await?;

    running.stop().await.context("Failed to stop server")?;
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM
async fn wait_for_shutdown_signal() -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt())
            .context("Failed to listen for SIGINT")?;
        let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to listen for SIGTERM")?;

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    {
        signal::ctrl_c()
            .await
            .context("Failed to listen for ctrl+c")?;
        info!("Received Ctrl+C, shutting down gracefully...");
    }

    Ok(())
}
