//! BiasGPT HTTP API
//!
//! HTTP layer for BiasGPT, built with Axum. Serves the server-rendered
//! pages, the installable-app manifest, JSON mirrors of the fixture
//! collections and health probes.
//!
//! # Endpoints
//!
//! ## Pages
//! - `GET /` - Landing page
//! - `GET /dashboard` - Trading dashboard
//! - `GET /chat` - Chat assistant page
//! - `POST /chat` - Submit a chat message (form-encoded)
//!
//! ## Manifest
//! - `GET /manifest.json` - Installable-app manifest
//!
//! ## Data
//! - `GET /api/v1/positions` - Open positions
//! - `GET /api/v1/bias` - Bias snapshot
//! - `GET /api/v1/whales` - Recent whale events
//! - `GET /api/v1/chat/history` - Current transcript
//! - `POST /api/v1/chat` - Append a user message (JSON)
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/positions", get(routes::data::list_positions))
        .route("/bias", get(routes::data::list_bias))
        .route("/whales", get(routes::data::list_whale_events))
        .route("/chat/history", get(routes::data::chat_history))
        .route("/chat", post(routes::data::submit_chat));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::home))
        .route("/dashboard", get(routes::pages::dashboard))
        .route("/chat", get(routes::pages::chat_page))
        .route("/chat", post(routes::pages::submit_chat))
        .route("/manifest.json", get(routes::manifest::manifest))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Fallback for unknown routes, in the standard error envelope
async fn not_found(uri: axum::http::Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}

/// Start the HTTP server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("BiasGPT listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("BiasGPT shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
