//! Per-client session state.
//!
//! The session lives in a server-side store and is addressed by a signed
//! cookie. It holds at most one value: the logged-in [`User`] under
//! [`USER_KEY`]. Handlers receive it as an [`AuthSession`] extractor.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use tower_sessions::{cookie::Key, Session};
use crate::errors::{AppError, AppResult};
use crate::models::User;

pub const USER_KEY: &str = "user";

// cookie::Key needs at least this many bytes of secret material
const MIN_SECRET_LEN: usize = 64;

/// Builds the cookie signing key from the configured secret, or a random one.
pub fn signing_key(secret: Option<&str>) -> anyhow::Result<Key> {
    match secret {
        Some(secret) if secret.len() < MIN_SECRET_LEN => anyhow::bail!(
            "session secret must be at least {} bytes, got {}",
            MIN_SECRET_LEN,
            secret.len()
        ),
        Some(secret) => Ok(Key::from(secret.as_bytes())),
        None => {
            tracing::warn!("No session secret configured, generating a random signing key");
            Ok(Key::generate())
        }
    }
}

pub struct AuthSession(Session);

#[async_trait]
impl<S> FromRequestParts<S> for AuthSession
where
    S: Send + Sync,
{
    type Rejection = <Session as FromRequestParts<S>>::Rejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Session::from_request_parts(parts, state).await.map(Self)
    }
}

impl AuthSession {
    pub async fn current_user(&self) -> AppResult<Option<User>> {
        Ok(self.0.get::<User>(USER_KEY).await?)
    }

    pub async fn require_user(&self) -> AppResult<User> {
        self.current_user().await?.ok_or(AppError::Unauthorized)
    }

    /// Replaces the session value with `user` under a fresh session id.
    pub async fn login(&self, user: &User) -> AppResult<()> {
        self.0.cycle_id().await?;
        self.0.insert(USER_KEY, user).await?;
        Ok(())
    }

    /// Drops all session state, server side included.
    pub async fn clear(&self) -> AppResult<()> {
        self.0.flush().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_secret_rejected() {
        assert!(signing_key(Some("too short")).is_err());
    }

    #[test]
    fn test_long_secret_accepted() {
        let secret = "x".repeat(MIN_SECRET_LEN);
        assert!(signing_key(Some(&secret)).is_ok());
    }

    #[test]
    fn test_missing_secret_generates_key() {
        assert!(signing_key(None).is_ok());
    }
}
