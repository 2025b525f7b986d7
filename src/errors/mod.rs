// Error types for the HTTP layer and the document stores, built on thiserror.
use axum::http::StatusCode;
use thiserror::Error;

pub mod response;
pub mod store;

pub use store::{StoreError, StoreResult};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Request body must be JSON")]
    UnsupportedMediaType,

    #[error("{0}")]
    BadRequest(String),

    #[error("Not authenticated")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    // Body extraction failures that carry their own status, e.g. 413.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    #[error("Password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
