use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use parley_persist::PersistError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request")]
    BadRequest(String),
    
    #[error("User not found")]
    Unauthorized(String),
    
    #[error("Failed to send message")]
    SendFailed(#[source] PersistError),
    
    #[error("Failed to get messages")]
    QueryFailed(#[source] PersistError),
    
    #[error("Error decoding messages")]
    DecodeFailed(#[source] PersistError),
}

impl ApiError {
    /// Map a list-messages failure, keeping decode errors distinct
    pub fn from_list_error(err: PersistError) -> Self {
        match err {
            PersistError::Decode(_) => ApiError::DecodeFailed(err),
            _ => ApiError::QueryFailed(err),
        }
    }
    
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::SendFailed(_) | ApiError::QueryFailed(_) | ApiError::DecodeFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(reason) => {
                tracing::debug!(%reason, "Rejected request body");
            }
            ApiError::Unauthorized(username) => {
                tracing::info!(%username, "Login rejected");
            }
            ApiError::SendFailed(e) | ApiError::QueryFailed(e) | ApiError::DecodeFailed(e) => {
                tracing::error!(error = %e, "{}", self);
            }
        }
        
        // Plain text body, no structured detail
        (self.status(), self.to_string()).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
