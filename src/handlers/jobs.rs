use axum::{
    extract::State,
    http::StatusCode,
};
use crate::app::AppState;
use crate::errors::AppResult;
use crate::models::{JobForm, NewJob, ValidJobForm};
use crate::session::AuthSession;
use super::json::JsonBody;

/// Creates a job owned by the logged-in user and returns its id as plain text.
///
/// Rejections are ordered: non-JSON body (415), then no session (401), then
/// missing fields (400).
#[axum::debug_handler(state = AppState)]
pub async fn create_job(
    State(state): State<AppState>,
    session: AuthSession,
    body: JsonBody,
) -> AppResult<(StatusCode, String)> {
    let user = session.require_user().await?;
    let form = ValidJobForm::try_from(body.parse::<JobForm>()?)?;

    let job_id = state
        .jobs
        .insert_job(NewJob {
            start_time: form.start_time,
            end_time: form.end_time,
            user: user.id,
        })
        .await?;

    tracing::info!("Created job {} for user {}", job_id, user.username);
    Ok((StatusCode::OK, job_id.to_string()))
}
