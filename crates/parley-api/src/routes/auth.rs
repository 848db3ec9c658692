use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{error::{ApiError, ApiResult}, routes::parse_json, state::AppState};

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub status: String,
}

impl LoginResponse {
    fn ok() -> Self {
        Self { status: "ok".to_string() }
    }
}

/// Check that a username is registered
/// 
/// Presence check only: no credential is verified.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User exists", body = LoginResponse),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "User not found")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<Json<LoginResponse>> {
    let req: LoginRequest = parse_json(&body)?;
    if req.username.is_empty() {
        return Err(ApiError::BadRequest("username is empty".to_string()));
    }
    
    match state.store.user_exists(&req.username).await {
        Ok(true) => {}
        Ok(false) => return Err(ApiError::Unauthorized(req.username)),
        Err(e) => {
            tracing::warn!(username = %req.username, error = %e, "User lookup failed");
            return Err(ApiError::Unauthorized(req.username));
        }
    }
    
    tracing::info!(username = %req.username, "Login succeeded");
    Ok(Json(LoginResponse::ok()))
}
