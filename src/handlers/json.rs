use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use crate::errors::{AppError, AppResult};

/// A request body that declared a JSON content type (415 otherwise).
///
/// Parsing is deferred to [`JsonBody::parse`] so handlers can check the
/// session first.
#[derive(Debug)]
pub struct JsonBody(Bytes);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType);
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Rejected {
                status: rejection.status(),
                message: rejection.body_text(),
            })?;
        Ok(Self(bytes))
    }
}

impl JsonBody {
    /// Parses the body into `T`. Only a JSON object is accepted, so fields
    /// are always matched by name.
    pub fn parse<T: DeserializeOwned>(&self) -> AppResult<T> {
        let value: Value = serde_json::from_slice(&self.0)
            .map_err(|e| AppError::BadRequest(format!("Failed to parse the request body as JSON: {}", e)))?;

        if !value.is_object() {
            return Err(AppError::BadRequest("request body must be a JSON object".into()));
        }

        serde_json::from_value(value)
            .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))
    }
}

// application/json or any application/*+json, parameters ignored
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use crate::models::CredentialsForm;

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers("application/json; charset=utf-8")));
        assert!(has_json_content_type(&headers("application/vnd.api+json")));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&headers("application/x-www-form-urlencoded")));
        assert!(!has_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn test_array_body_rejected() {
        let body = JsonBody(Bytes::from_static(br#"["mallory", "pw"]"#));
        let err = body.parse::<CredentialsForm>().unwrap_err();
        assert_eq!(err.to_string(), "request body must be a JSON object");
    }

    #[test]
    fn test_malformed_body_rejected() {
        let body = JsonBody(Bytes::from_static(b"{not json"));
        assert!(matches!(body.parse::<CredentialsForm>(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_object_body_parsed() {
        let body = JsonBody(Bytes::from_static(br#"{"username": "alice", "password": "pw"}"#));
        let form: CredentialsForm = body.parse().unwrap();
        assert_eq!(form.username.as_deref(), Some("alice"));
    }
}
