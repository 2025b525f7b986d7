use serde::Deserialize;
use serde_json::Value;
use crate::errors::{AppError, AppResult};

// Request bodies keep every field optional so that a missing (or null) field
// is reported by name instead of as a generic deserialization failure.

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl TryFrom<CredentialsForm> for Credentials {
    type Error = AppError;

    fn try_from(form: CredentialsForm) -> AppResult<Self> {
        Ok(Self {
            username: required(form.username, "username")?,
            password: required(form.password, "password")?,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct JobForm {
    pub start_time: Option<Value>,
    pub end_time: Option<Value>,
}

#[derive(Debug)]
pub struct ValidJobForm {
    pub start_time: Value,
    pub end_time: Value,
}

impl TryFrom<JobForm> for ValidJobForm {
    type Error = AppError;

    fn try_from(form: JobForm) -> AppResult<Self> {
        Ok(Self {
            start_time: required(form.start_time, "start_time")?,
            end_time: required(form.end_time, "end_time")?,
        })
    }
}

fn required<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::BadRequest(format!("missing {} property", field)))
}
