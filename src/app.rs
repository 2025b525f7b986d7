use axum::{
    routing::{get, post},
    Router,
    middleware::from_fn,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tower_sessions::cookie::{Key, SameSite};
use std::sync::Arc;
use crate::{
    config::{Config, SessionConfig, StorageBackend},
    errors::{AppError, AppResult},
    handlers,
    middleware,
    services::{CredentialStore, InMemoryStore, JobStore, PasswordHasher, RedisService},
};

// Application state that can be shared between handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn CredentialStore>,
    pub jobs: Arc<dyn JobStore>,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let hasher = PasswordHasher::new(config.security.bcrypt_cost);

        let state = match config.storage.backend {
            StorageBackend::Redis => {
                let redis = Arc::new(RedisService::connect(&config.redis).await?);
                Self { users: redis.clone(), jobs: redis, hasher }
            }
            StorageBackend::Memory => {
                tracing::warn!("Using the in-memory store, data will not survive a restart");
                let store = Arc::new(InMemoryStore::new());
                Self { users: store.clone(), jobs: store, hasher }
            }
        };
        Ok(state)
    }
}

/// Builds the full router: routes, session layer, body limit, JSON errors
/// and request tracing.
pub fn build_router(
    state: AppState,
    session: &SessionConfig,
    key: Key,
    max_body_size: usize,
) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_name(session.cookie_name.clone())
        .with_secure(session.secure)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_signed(key);

    Router::new()
        .route("/logout", get(handlers::handle_logout))
        .route(
            "/user",
            get(handlers::who_am_i)
                .put(handlers::handle_login)
                .post(handlers::handle_register),
        )
        .route("/jobs", post(handlers::create_job))
        .fallback(not_found)
        .layer(session_layer)
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(from_fn(middleware::json_errors))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> AppResult<()> {
    Err(AppError::NotFound("The requested URL was not found on the server".into()))
}
