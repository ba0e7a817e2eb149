//! Data Transfer Objects
//!
//! Request and response types for the JSON API endpoints.

use crate::model::{BiasSnapshot, ChatMessage, Position, WhaleEvent};
use serde::{Deserialize, Serialize};

// ============================================
// COLLECTION DTOs
// ============================================

/// GET /api/v1/positions response
#[derive(Debug, Serialize)]
pub struct PositionListResponse {
    pub total: usize,
    pub positions: Vec<Position>,
}

/// GET /api/v1/bias response
#[derive(Debug, Serialize)]
pub struct BiasListResponse {
    pub total: usize,
    pub bias: Vec<BiasSnapshot>,
}

/// GET /api/v1/whales response
#[derive(Debug, Serialize)]
pub struct WhaleListResponse {
    pub total: usize,
    pub events: Vec<WhaleEvent>,
}

// ============================================
// CHAT DTOs
// ============================================

/// GET /api/v1/chat/history response
#[derive(Debug, Serialize)]
pub struct ChatHistoryResponse {
    pub total: usize,
    pub messages: Vec<ChatMessage>,
}

/// POST /api/v1/chat request
#[derive(Debug, Deserialize)]
pub struct ChatSubmitRequest {
    /// User input; rejected when empty after trimming
    pub message: String,
}

/// POST /api/v1/chat response
#[derive(Debug, Serialize)]
pub struct ChatSubmitResponse {
    /// The appended user message
    pub message: ChatMessage,
    /// Transcript length after the append
    pub transcript_len: usize,
}

/// Form body for the HTML chat page submit
#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    pub message: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// GET /health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Manifest structural check: "ok" or "error"
    pub manifest: String,
    pub uptime_seconds: u64,
    pub version: String,
}
