use axum::Router;
use tokio::signal;
use tracing::info;

use crate::error::ServerError;

/// Bind `address` and serve `app` until SIGINT or SIGTERM.
///
/// # Errors
/// `ServerError::Bind` if the listener cannot be bound; `ServerError::Server`
/// on I/O failure while serving.
pub async fn serve(app: Router, address: &str) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|e| ServerError::Bind {
            address: address.to_string(),
            source: e,
        })?;
    info!("Listening on {}", listener.local_addr()?);
    info!("  - GET  /aggregate   (alias /api/fetch)");
    info!("  - GET  /report      (alias /api/analyze_video)");
    info!("  - GET  /health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Wait for SIGTERM or SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
