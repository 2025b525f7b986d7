use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tokio::sync::RwLock;
use crate::errors::{StoreError, StoreResult};
use crate::models::{Job, JobId, NewJob, NewUser, User, UserId};
use super::{CredentialStore, JobStore};

/// Process-local document store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<HashMap<String, User>>,
    jobs: RwLock<HashMap<JobId, Job>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryStore {
    pub async fn job(&self, id: &JobId) -> Option<Job> {
        self.jobs.read().await.get(id).cloned()
    }

    pub async fn user_count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl CredentialStore for InMemoryStore {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users.write().await;
        match users.entry(user.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateUsername(user.username)),
            Entry::Vacant(slot) => Ok(slot.insert(user.with_id(UserId::generate())).clone()),
        }
    }
}

#[async_trait]
impl JobStore for InMemoryStore {
    async fn insert_job(&self, job: NewJob) -> StoreResult<JobId> {
        let job = job.with_id(JobId::generate());
        let id = job.id.clone();
        self.jobs.write().await.insert(id.clone(), job);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_then_find() {
        let store = InMemoryStore::new();
        let user = store.insert_user(new_user("alice")).await.unwrap();

        let found = store.find_by_username("alice").await.unwrap();
        assert_eq!(found, Some(user));
        assert!(store.find_by_username("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_rejected() {
        let store = InMemoryStore::new();
        let first = store.insert_user(new_user("alice")).await.unwrap();

        let err = store.insert_user(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUsername(name) if name == "alice"));

        // The original record is untouched
        assert_eq!(store.user_count().await, 1);
        assert_eq!(store.find_by_username("alice").await.unwrap(), Some(first));
    }

    #[tokio::test]
    async fn test_insert_job_assigns_id() {
        let store = InMemoryStore::new();
        let owner = UserId::generate();
        let id = store
            .insert_job(NewJob {
                start_time: json!(1),
                end_time: json!(2),
                user: owner.clone(),
            })
            .await
            .unwrap();

        let job = store.job(&id).await.unwrap();
        assert_eq!(job.user, owner);
        assert_eq!(job.start_time, json!(1));
    }
}
