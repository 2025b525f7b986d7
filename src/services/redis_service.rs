use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use crate::config::RedisConfig;
use crate::errors::{StoreError, StoreResult};
use crate::models::{JobId, NewJob, NewUser, User, UserId};
use super::{CredentialStore, JobStore};

/// Document store backed by Redis. Every document is a JSON string under
/// `{namespace}:{collection}:{key}`.
#[derive(Clone)]
pub struct RedisService {
    conn: ConnectionManager,
    namespace: String,
}

impl RedisService {
    pub async fn connect(config: &RedisConfig) -> StoreResult<Self> {
        let client = Client::open(config.url.as_str())?;
        let conn = client.get_connection_manager().await?;
        tracing::info!("Connected to Redis, namespace {}", config.namespace);
        Ok(Self {
            conn,
            namespace: config.namespace.clone(),
        })
    }
}

fn user_key(namespace: &str, username: &str) -> String {
    format!("{}:users:{}", namespace, username)
}

fn job_key(namespace: &str, id: &JobId) -> String {
    format!("{}:jobs:{}", namespace, id)
}

#[async_trait]
impl CredentialStore for RedisService {
    async fn find_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let mut conn = self.conn.clone();
        let user_data: Option<String> = conn.get(user_key(&self.namespace, username)).await?;
        user_data
            .map(|data| serde_json::from_str(&data).map_err(StoreError::from))
            .transpose()
    }

    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut conn = self.conn.clone();
        let user = user.with_id(UserId::generate());
        let key = user_key(&self.namespace, &user.username);

        // SET NX doubles as the unique index on username
        let created: bool = conn.set_nx(&key, serde_json::to_string(&user)?).await?;
        if !created {
            return Err(StoreError::DuplicateUsername(user.username));
        }
        Ok(user)
    }
}

#[async_trait]
impl JobStore for RedisService {
    async fn insert_job(&self, job: NewJob) -> StoreResult<JobId> {
        let mut conn = self.conn.clone();
        let job = job.with_id(JobId::generate());
        let _: () = conn
            .set(job_key(&self.namespace, &job.id), serde_json::to_string(&job)?)
            .await?;
        Ok(job.id)
    }
}
