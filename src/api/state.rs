//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::chat::Transcript;
use crate::fixtures::MarketData;
use crate::manifest::Manifest;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Market-data provider behind the backend seam
    pub provider: Arc<dyn MarketData>,
    /// Validated installable-app manifest
    pub manifest: Arc<Manifest>,
    /// Session chat transcript; the only mutable state in the app
    pub transcript: Arc<RwLock<Transcript>>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state over a provider with an empty transcript seed.
    ///
    /// Call [`AppState::seed_transcript`] afterwards to load the
    /// provider's chat history.
    pub fn new(provider: Arc<dyn MarketData>, manifest: Manifest, config: ApiConfig) -> Self {
        Self {
            provider,
            manifest: Arc::new(manifest),
            transcript: Arc::new(RwLock::new(Transcript::default())),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Seed the transcript from the provider's chat history.
    pub async fn seed_transcript(&self) {
        let history = self.provider.chat_history().await;
        *self.transcript.write().await = Transcript::seeded(history);
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
