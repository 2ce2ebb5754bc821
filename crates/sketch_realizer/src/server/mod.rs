//! Form server: one page with an upload control, a style dropdown and the
//! results of the last run.

mod handlers;
mod page;

pub use page::{PageView, Pages};

use crate::{Realizer, ServerSettings};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use sketch_error::{ServerError, ServerErrorKind, SketchResult};
use std::sync::Arc;
use tokio::signal;
use tracing::{info, instrument, warn};

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    realizer: Realizer,
    pages: Arc<Pages>,
}

impl AppState {
    /// Creates handler state around a realizer.
    ///
    /// # Errors
    ///
    /// Returns a server error if the page template fails to compile.
    pub fn new(realizer: Realizer) -> SketchResult<Self> {
        Ok(Self {
            realizer,
            pages: Arc::new(Pages::new()?),
        })
    }
}

/// Creates the form router.
///
/// - `GET /` renders the empty form
/// - `POST /realize` accepts a multipart upload and renders the results
/// - `GET /health` reports liveness
pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/realize", post(handlers::realize))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

/// Binds the listen address and serves until Ctrl+C or SIGTERM.
#[instrument(skip(state), fields(bind = %settings.bind))]
pub async fn serve(state: AppState, settings: &ServerSettings) -> SketchResult<()> {
    let listener = tokio::net::TcpListener::bind(&settings.bind)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(format!("{}: {}", settings.bind, e))))?;

    info!("Kid Sketch Realizer listening on http://{}", settings.bind);

    axum::serve(listener, create_router(state, settings.max_upload_bytes))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Form server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received terminate signal, shutting down"),
    }
}
