use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::signal;

use video_link_service::{create_router, utils, AppConfig, AppState};

/// Graceful shutdown signal handler
///
/// Handles shutdown signals gracefully, allowing in-flight requests to complete
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down gracefully...");
        },
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    utils::logging::init_logging()?;

    let config = Arc::new(AppConfig::load()?);

    // Refuse to start without a complete set of provider credentials
    config.provider.credentials()?;

    let state = AppState::from_config(config.clone())?;
    let app = create_router(state);

    let addr = SocketAddr::from((config.server.host.parse::<std::net::IpAddr>()?, config.server.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
