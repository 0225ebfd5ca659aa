// HTTP API Error Types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Every failure a handler can report. Bodies are plain text; not-found
/// carries no body at all.
#[derive(Debug, Error)]
pub enum ApiError {
    // 400 Bad Request
    #[error("{0}")]
    BadRequest(String),

    // 401 Unauthorized
    #[error("401 - Unauthorized")]
    Unauthorized,

    // 404 Not Found
    #[error("not found")]
    NotFound,

    // 405 Method Not Allowed
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    // 415 Unsupported Media Type
    #[error("need content-type = 'application/json', but got '{0}'")]
    UnsupportedMediaType(String),

    // 500 Internal Server Error
    #[error("{0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unsupported_media_type(content_type: impl Into<String>) -> Self {
        ApiError::UnsupportedMediaType(content_type.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("JSON serialization error: {}", err);
        ApiError::internal_server_error(err.to_string())
    }
}

impl From<axum::Error> for ApiError {
    fn from(err: axum::Error) -> Self {
        tracing::error!("Failed to read request body: {}", err);
        ApiError::internal_server_error(err.to_string())
    }
}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::NotFound => status.into_response(),
            other => (status, other.to_string()).into_response(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
