use serde::{Deserialize, Serialize};
use super::UserId;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub password_hash: String,
}

/// A user as submitted for registration, before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            username: self.username,
            password_hash: self.password_hash,
        }
    }
}
