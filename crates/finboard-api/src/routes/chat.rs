//! Finance assistant chat API endpoints
//!
//! Sending a message records it immediately; the bot reply is appended by a
//! background task after the configured delay. Clients poll `GET /api/chat`.

use crate::error::ApiResult;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use finboard_core::chat::SUGGESTED_QUESTIONS;
use finboard_core::{ChatMessage, ReplyTask};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub messages: Vec<ChatMessage>,
    pub is_typing: bool,
    pub suggested_questions: Vec<&'static str>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub message: String,
}

/// Get the conversation so far
pub async fn api_chat(State(state): State<AppState>) -> Json<ChatResponse> {
    let session = state.chat.read().await;
    Json(ChatResponse {
        messages: session.messages().to_vec(),
        is_typing: session.is_typing(),
        suggested_questions: SUGGESTED_QUESTIONS.to_vec(),
    })
}

/// Send a user message and schedule the assistant's reply
pub async fn api_send_chat(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ChatMessage>)> {
    let Json(request) = payload?;

    // Taken first so a concurrent reset sees the message and its reply together
    let mut replies = state.replies.lock().await;
    let message = state.chat.write().await.push_user(&request.message)?;

    let delay = Duration::from_millis(state.config.chat.reply_delay_ms);
    let task = ReplyTask::schedule(state.chat.clone(), &request.message, delay);

    replies.retain(|r| !r.is_finished());
    replies.push(task);
    log::debug!("Scheduled chat reply to message {} ({} pending)", message.id, replies.len());

    Ok((StatusCode::ACCEPTED, Json(message)))
}
