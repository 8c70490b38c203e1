use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::use_cases::auth::login::LoginError;

/// `{"msg": ...}` body shared by success and error replies.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub msg: String,
}

impl MessageResponse {
    pub fn new(msg: impl Into<String>) -> Json<Self> {
        Json(Self { msg: msg.into() })
    }
}

/// `{"error": ...}` body used by `/apply` failures.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unauthorized")]
    Unauthorized,
    #[error(transparent)]
    Login(#[from] LoginError),
    #[error("could not submit application")]
    Submission,
    #[error("{0}")]
    Storage(&'static str),
    #[error("file not found")]
    NotFound,
    #[error("internal error")]
    Internal,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Login(LoginError::UnknownUser | LoginError::WrongPassword) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Login(LoginError::Internal(_))
            | ApiError::Submission
            | ApiError::Storage(_)
            | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let msg = self.to_string();
        match self {
            ApiError::Submission => (status, Json(ErrorResponse { error: msg })).into_response(),
            // Never leak the underlying cause of a failed login.
            ApiError::Login(LoginError::Internal(_)) => {
                (status, MessageResponse::new("internal error")).into_response()
            }
            _ => (status, MessageResponse::new(msg)).into_response(),
        }
    }
}
