//! HTTP server setup and lifecycle

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix;
use tower_http::trace::TraceLayer;

use crate::{handlers, media_storage::MediaStorage, state::AppState, types::Config};

/// Starts the server with the given configuration and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to bind to the port or stops
/// unexpectedly while serving.
pub async fn start(config: &Config, media_storage: Arc<MediaStorage>) -> anyhow::Result<()> {
    let state = AppState { media_storage };

    let router = handlers::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Image upload service started on http://{addr}");

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Waits for a shutdown signal (SIGTERM or SIGINT/Ctrl+C)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
        } else {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
                tracing::info!("Received SIGTERM signal, initiating graceful shutdown");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
