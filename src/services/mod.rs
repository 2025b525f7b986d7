mod store;
mod redis_service;
mod memory_store;
mod password;

pub use store::{CredentialStore, JobStore};
pub use redis_service::RedisService;
pub use memory_store::InMemoryStore;
pub use password::PasswordHasher;
