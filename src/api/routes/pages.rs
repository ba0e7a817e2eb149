//! Page Routes
//!
//! Server-rendered HTML surfaces.
//!
//! - GET / - Landing page
//! - GET /dashboard - Trading dashboard
//! - GET /chat - Chat assistant page
//! - POST /chat - Submit a chat message, redirect back to /chat

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use std::sync::Arc;

use crate::api::dto::ChatForm;
use crate::api::state::AppState;
use crate::pages;

/// GET /
pub async fn home() -> Html<String> {
    Html(pages::home::render())
}

/// GET /dashboard
///
/// Pulls the three non-chat collections from the provider and renders
/// them pass-through, in provider order.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Html<String> {
    let positions = state.provider.positions().await;
    let bias = state.provider.bias_snapshot().await;
    let whale_events = state.provider.whale_events().await;

    Html(pages::dashboard::render(&positions, &bias, &whale_events))
}

/// GET /chat
pub async fn chat_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let transcript = state.transcript.read().await;
    Html(pages::chat::render(transcript.messages()))
}

/// POST /chat
///
/// Appends the submitted message to the transcript. Empty or
/// whitespace-only input is a no-op; either way the browser is sent back
/// to the chat page.
pub async fn submit_chat(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ChatForm>,
) -> Redirect {
    let mut transcript = state.transcript.write().await;
    if let Some(message) = transcript.submit(&form.message) {
        tracing::debug!(content = %message.content, "chat message appended");
    }

    Redirect::to("/chat")
}
