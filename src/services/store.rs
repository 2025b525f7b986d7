use async_trait::async_trait;
use crate::errors::StoreResult;
use crate::models::{JobId, NewJob, NewUser, User};

/// The `users` collection.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Inserts a user and assigns its id.
    ///
    /// Fails with [`StoreError::DuplicateUsername`](crate::errors::StoreError::DuplicateUsername)
    /// when the username is already taken. The check and the write are atomic.
    async fn insert_user(&self, user: NewUser) -> StoreResult<User>;
}

/// The `jobs` collection. Insert-only.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert_job(&self, job: NewJob) -> StoreResult<JobId>;
}
