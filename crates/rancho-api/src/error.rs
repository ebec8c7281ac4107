use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rancho_core::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Body shared by every message-only response
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<CoreError> for AppError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(message) => Self::bad_request(message),
            CoreError::ItemNotFound(_) => Self::not_found("Item not found"),
            CoreError::HistoryEntryNotFound(_) => Self::not_found("Historical item not found"),
            CoreError::NoItemsFound => Self::not_found("No data found"),
            CoreError::EmptyHistory => Self::not_found("O Histórico esta Vazio"),
            CoreError::Io(_) | CoreError::Serialization(_) => Self::internal(error.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::NotFound(message) => (StatusCode::NOT_FOUND, message),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_string(),
                )
            }
        };
        (status, Json(MessageBody::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rancho_core::ItemId;

    #[test]
    fn core_errors_map_to_http_status() {
        let cases = [
            (
                AppError::from(CoreError::InvalidInput("bad".to_string())),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::from(CoreError::ItemNotFound(ItemId::from("x"))),
                StatusCode::NOT_FOUND,
            ),
            (AppError::from(CoreError::EmptyHistory), StatusCode::NOT_FOUND),
            (
                AppError::from(CoreError::Io(std::io::Error::other("disk full"))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn internal_error_keeps_detail_for_logs() {
        let error = AppError::from(CoreError::Io(std::io::Error::other("disk full")));
        assert!(error.to_string().contains("disk full"));
        let AppError::Internal(_) = error else {
            panic!("expected internal error");
        };
    }
}
