mod id;
mod user;
mod job;
mod forms;

pub use id::{UserId, JobId};
pub use user::{User, NewUser};
pub use job::{Job, NewJob};
pub use forms::{CredentialsForm, Credentials, JobForm, ValidJobForm};
