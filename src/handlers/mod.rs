mod auth;
mod jobs;
mod json;

pub use auth::{handle_login, handle_register, handle_logout, who_am_i};
pub use jobs::create_job;
