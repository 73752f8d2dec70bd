use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Access denied")]
    Forbidden,

    #[error("Resource not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("Realtime bus error: {0}")]
    Realtime(String),

    #[error("Mail delivery error: {0}")]
    Mail(String),

    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("Collaborator timeout: {0}")]
    Timeout(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN", self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND", self.to_string()),
            AppError::InvalidTimestamp(e) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", e.to_string())
            }
            AppError::Timeout(collaborator) => {
                tracing::error!("collaborator timeout: {collaborator}");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "COLLABORATOR_TIMEOUT",
                    self.to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("database error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "Database error occurred".to_string(),
                )
            }
            AppError::Cache(e) => {
                tracing::error!("cache error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CACHE_ERROR",
                    "Cache error occurred".to_string(),
                )
            }
            AppError::Realtime(e) => {
                tracing::error!("realtime bus error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REALTIME_ERROR",
                    "Realtime bus error occurred".to_string(),
                )
            }
            AppError::Mail(e) => {
                tracing::error!("mail error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "MAIL_ERROR",
                    "Mail delivery failed".to_string(),
                )
            }
            AppError::Token(e) => {
                tracing::error!("token error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TOKEN_ERROR",
                    "Token signing failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
