use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use items::{ItemId, StoreError};
use matcher::MatchError;
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Item {0} not found")]
    ItemNotFound(ItemId),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::AuthRequired(_) => StatusCode::UNAUTHORIZED,
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::ItemNotFound(_) | ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Store(StoreError::DuplicateId(_)) => StatusCode::CONFLICT,
            ServerError::Store(StoreError::IdSpaceExhausted) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Store(_) | ServerError::Match(MatchError::Store(_)) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ServerError::Match(MatchError::InvalidConfig(_))
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::AuthRequired(_) => "AUTH_REQUIRED",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            ServerError::Match(MatchError::Store(_)) | ServerError::Store(_) => "STORE_ERROR",
            ServerError::Match(MatchError::InvalidConfig(_)) => "MATCH_CONFIG_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, code = self.error_code(), "request failed");
        }

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        });

        (status, body).into_response()
    }
}

impl From<std::net::AddrParseError> for ServerError {
    fn from(err: std::net::AddrParseError) -> Self {
        ServerError::Config(format!("Invalid address: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ServerError::AuthRequired("missing".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ServerError::ItemNotFound(ItemId(3)).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ServerError::Store(StoreError::DuplicateId(3)).status_code(),
            StatusCode::CONFLICT
        );
        let store_down = ServerError::Match(MatchError::Store(StoreError::backend("down")));
        assert_eq!(store_down.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(store_down.error_code(), "STORE_ERROR");
        assert_eq!(
            ServerError::Store(StoreError::IdSpaceExhausted).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
