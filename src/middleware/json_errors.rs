use axum::{
    middleware::Next,
    response::Response,
    extract::Request,
    body::Body,
    http::header,
};
use crate::errors::response::ErrorBody;

/// Rewrites any error response that is not already JSON (unknown route,
/// wrong method, oversized body, ...) into the service's JSON error shape.
pub async fn json_errors(
    req: Request<Body>,
    next: Next,
) -> Response {
    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value.starts_with("application/json"));
    if is_json {
        return response;
    }

    tracing::debug!("Converting {} response to JSON", status);
    let message = status.canonical_reason().unwrap_or("Error");
    let mut json_response = ErrorBody::new(status, message).into_response_with(status);

    // Keep headers such as Allow, but not the ones describing the old body
    for (name, value) in response.headers() {
        if *name != header::CONTENT_TYPE && *name != header::CONTENT_LENGTH {
            json_response.headers_mut().append(name.clone(), value.clone());
        }
    }
    json_response
}
