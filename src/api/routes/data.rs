//! Data Routes
//!
//! Read-only JSON mirrors of the fixture collections, plus the JSON chat
//! submit. These expose the same contract a live backend would feed the
//! pages through.
//!
//! - GET /api/v1/positions - Open positions
//! - GET /api/v1/bias - Bias snapshot
//! - GET /api/v1/whales - Recent whale events
//! - GET /api/v1/chat/history - Current transcript
//! - POST /api/v1/chat - Append a user message

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{
    BiasListResponse, ChatHistoryResponse, ChatSubmitRequest, ChatSubmitResponse,
    PositionListResponse, WhaleListResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// GET /api/v1/positions
pub async fn list_positions(State(state): State<Arc<AppState>>) -> Json<PositionListResponse> {
    let positions = state.provider.positions().await;
    Json(PositionListResponse {
        total: positions.len(),
        positions,
    })
}

/// GET /api/v1/bias
pub async fn list_bias(State(state): State<Arc<AppState>>) -> Json<BiasListResponse> {
    let bias = state.provider.bias_snapshot().await;
    Json(BiasListResponse {
        total: bias.len(),
        bias,
    })
}

/// GET /api/v1/whales
pub async fn list_whale_events(State(state): State<Arc<AppState>>) -> Json<WhaleListResponse> {
    let events = state.provider.whale_events().await;
    Json(WhaleListResponse {
        total: events.len(),
        events,
    })
}

/// GET /api/v1/chat/history
pub async fn chat_history(State(state): State<Arc<AppState>>) -> Json<ChatHistoryResponse> {
    let transcript = state.transcript.read().await;
    Json(ChatHistoryResponse {
        total: transcript.len(),
        messages: transcript.messages().to_vec(),
    })
}

/// POST /api/v1/chat
///
/// Unlike the HTML form, the JSON surface reports an empty submission
/// explicitly instead of silently ignoring it.
pub async fn submit_chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatSubmitRequest>,
) -> ApiResult<(StatusCode, Json<ChatSubmitResponse>)> {
    let mut transcript = state.transcript.write().await;

    let message = transcript
        .submit(&request.message)
        .ok_or_else(|| ApiError::Validation("message must not be empty".to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(ChatSubmitResponse {
            message,
            transcript_len: transcript.len(),
        }),
    ))
}
