use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::{JobId, UserId};

// start_time and end_time are stored exactly as the client sent them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Job {
    pub id: JobId,
    pub start_time: Value,
    pub end_time: Value,
    pub user: UserId,
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub start_time: Value,
    pub end_time: Value,
    pub user: UserId,
}

impl NewJob {
    pub fn with_id(self, id: JobId) -> Job {
        Job {
            id,
            start_time: self.start_time,
            end_time: self.end_time,
            user: self.user,
        }
    }
}
