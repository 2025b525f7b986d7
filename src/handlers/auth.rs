use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use crate::app::AppState;
use crate::errors::{AppError, AppResult, StoreError};
use crate::models::{Credentials, CredentialsForm, NewUser, User};
use crate::session::AuthSession;
use super::json::JsonBody;

pub async fn handle_logout(session: AuthSession) -> AppResult<StatusCode> {
    session.clear().await?;
    tracing::debug!("Session cleared");
    Ok(StatusCode::OK)
}

pub async fn who_am_i(session: AuthSession) -> AppResult<Json<User>> {
    let user = session.require_user().await?;
    Ok(Json(user))
}

/// Any failure past the media type check leaves the client logged out.
#[axum::debug_handler(state = AppState)]
pub async fn handle_login(
    State(state): State<AppState>,
    session: AuthSession,
    body: JsonBody,
) -> AppResult<StatusCode> {
    match authenticate(&state, &body).await {
        Ok(user) => {
            session.login(&user).await?;
            tracing::info!("User {} logged in", user.username);
            Ok(StatusCode::OK)
        }
        Err(e) => {
            session.clear().await?;
            Err(e)
        }
    }
}

async fn authenticate(state: &AppState, body: &JsonBody) -> AppResult<User> {
    let credentials = Credentials::try_from(body.parse::<CredentialsForm>()?)?;
    tracing::info!("Login attempt for user: {}", credentials.username);

    let Some(user) = state.users.find_by_username(&credentials.username).await? else {
        tracing::warn!("User not found: {}", credentials.username);
        return Err(AppError::BadRequest("User not found".into()));
    };

    if !state.hasher.verify(&credentials.password, &user.password_hash)? {
        tracing::warn!("Invalid password for user: {}", credentials.username);
        return Err(AppError::BadRequest("Password does not match".into()));
    }

    Ok(user)
}

#[axum::debug_handler(state = AppState)]
pub async fn handle_register(
    State(state): State<AppState>,
    body: JsonBody,
) -> AppResult<StatusCode> {
    let credentials = Credentials::try_from(body.parse::<CredentialsForm>()?)?;
    let password_hash = state.hasher.hash(&credentials.password)?;

    let new_user = NewUser {
        username: credentials.username,
        password_hash,
    };
    match state.users.insert_user(new_user).await {
        Ok(user) => {
            tracing::info!("Registered user {} ({})", user.username, user.id);
            Ok(StatusCode::CREATED)
        }
        Err(StoreError::DuplicateUsername(username)) => {
            tracing::warn!("Registration rejected, username taken: {}", username);
            Err(AppError::NotFound("User already exists".into()))
        }
        Err(e) => Err(e.into()),
    }
}
