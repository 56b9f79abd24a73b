//! Chat handler
//!
//! The body is taken as raw bytes so the credential check runs before any
//! parsing happens.

use crate::error::Result;
use crate::models::chat::ChatResponse;
use crate::services::chat::ChatService;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

/// Answers one chat turn.
///
/// # Example
/// ```bash
/// curl -X POST http://localhost:3000/api/chat \
///   -H "Content-Type: application/json" \
///   -d '{"messages":[{"role":"user","content":"Help me plan my morning"}],"personaId":"companion"}'
/// # Returns: {"reply":"..."}
/// ```
#[tracing::instrument(skip_all)]
pub async fn post_chat(State(state): State<AppState>, body: Bytes) -> Result<Json<ChatResponse>> {
    tracing::info!(body_bytes = body.len(), "[ChatHandler] Received chat request");

    let response = ChatService::handle(&state, &body).await?;

    tracing::debug!(reply_chars = response.reply.len(), "[ChatHandler] Reply ready");
    Ok(Json(response))
}
