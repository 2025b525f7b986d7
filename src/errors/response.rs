use axum::{
    response::{IntoResponse, Response, Json},
    http::StatusCode,
};
use serde::Serialize;
use crate::errors::AppError;

/// Body shared by every error response the service emits.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub name: &'static str,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            name: status.canonical_reason().unwrap_or("Error"),
            message: message.into(),
        }
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Rejected { status, .. } => *status,
            AppError::Store(_) | AppError::Session(_) | AppError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// The IntoResponse trait implementation converts AppError into a JSON error response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            // Internal details stay in the logs
            tracing::error!("Request failed: {}", self);
            status.canonical_reason().unwrap_or("Internal Server Error").to_string()
        } else {
            self.to_string()
        };

        ErrorBody::new(status, message).into_response_with(status)
    }
}
