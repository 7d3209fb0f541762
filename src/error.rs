use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("No tiene permisos")]
    Unauthorized,

    #[error("Token inválido")]
    Forbidden,

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode query: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

impl AppError {
    /// 401 and 403 are reported through notices, not through the page body.
    pub fn is_auth(&self) -> bool {
        matches!(self, AppError::Unauthorized | AppError::Forbidden)
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found".to_string()),
            AppError::Http { status, message } => {
                error!("backend answered {}: {}", status, message);
                (StatusCode::BAD_GATEWAY, message.clone())
            }
            AppError::Network(e) => {
                error!("network error: {}", e);
                (StatusCode::BAD_GATEWAY, "Backend unavailable".to_string())
            }
            AppError::Decode(e) => {
                error!("decode error: {}", e);
                (StatusCode::BAD_GATEWAY, "Unexpected backend response".to_string())
            }
            AppError::Query(e) => {
                error!("query encoding error: {}", e);
                (StatusCode::BAD_REQUEST, "Invalid filter".to_string())
            }
            AppError::Template(e) => {
                error!("template error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Config(msg) => {
                error!("configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: status.to_string(),
            message: error_message,
        });

        (status, body).into_response()
    }
}
