//! # BiasGPT
//!
//! Whale-driven AI trader dashboard and chat assistant, served as a
//! small full-stack Rust application. The pages render fixture data
//! through total render functions; the real collaborators (market-data
//! ingestion, whale-event detection, bias computation, chat-model
//! inference) sit behind the [`fixtures::MarketData`] seam and are out
//! of scope.
//!
//! ## Modules
//!
//! - [`model`]: Record shapes for positions, bias, whale events and chat
//! - [`fixtures`]: Sample data provider behind the backend seam
//! - [`chat`]: Session chat transcript
//! - [`manifest`]: Installable-app manifest and its structural check
//! - [`pages`]: Server-rendered HTML pages
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use biasgpt::api::{serve, ApiConfig, AppState};
//! use biasgpt::fixtures::SampleData;
//! use biasgpt::manifest::Manifest;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manifest = Manifest::embedded()?;
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(Arc::new(SampleData::new()), manifest, config.clone());
//!     state.seed_transcript().await;
//!
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chat;
pub mod config;
pub mod fixtures;
pub mod manifest;
pub mod model;
pub mod pages;

// Re-export top-level types for convenience
pub use api::{build_router, serve, ApiConfig, ApiError, AppState};
pub use chat::Transcript;
pub use config::{Config, ConfigError};
pub use fixtures::{MarketData, SampleData};
pub use manifest::{Manifest, ManifestError};
pub use model::{BiasSnapshot, ChatMessage, Position, Role, Side, WhaleEvent};
