use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use parley_persist::ChatMessage;
use crate::{error::{ApiError, ApiResult}, routes::parse_json, state::AppState};

/// Body of `POST /send`. Any client-supplied `sent_at` is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub message: String,
}

/// A stored message as returned by `GET /messages`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub username: String,
    pub message: String,
    pub sent_at: chrono::DateTime<chrono::Utc>,
}

/// Store a message stamped with the server time
#[utoipa::path(
    post,
    path = "/send",
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message stored"),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Failed to send message")
    ),
    tag = "messages"
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<()> {
    let req: SendMessageRequest = parse_json(&body)?;
    if req.username.is_empty() || req.message.is_empty() {
        return Err(ApiError::BadRequest("username and message are required".to_string()));
    }
    
    let message = ChatMessage::new(req.username, req.message);
    let (username, text) = (message.username.clone(), message.message.clone());
    
    state
        .store
        .insert_message(message)
        .await
        .map_err(ApiError::SendFailed)?;
    
    tracing::info!(username = %username, message = %text, "Message stored");
    Ok(())
}

/// List every message, oldest first
#[utoipa::path(
    get,
    path = "/messages",
    responses(
        (status = 200, description = "All messages ascending by sent_at", body = [MessageResponse]),
        (status = 500, description = "Failed to get messages")
    ),
    tag = "messages"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let messages = state
        .store
        .list_messages()
        .await
        .map_err(ApiError::from_list_error)?;
    
    tracing::info!(count = messages.len(), "Messages returned");
    Ok(Json(messages.into_iter().map(message_to_response).collect()))
}

fn message_to_response(message: ChatMessage) -> MessageResponse {
    MessageResponse {
        username: message.username,
        message: message.message,
        sent_at: message.sent_at,
    }
}
