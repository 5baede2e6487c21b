// src/logging_middleware.rs
//! Middleware for logging request and response bodies in debug mode

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use axum::body::to_bytes;
use tracing::debug;

/// Body fields that must never reach the logs
const SENSITIVE_FIELDS: [&str; 3] = ["password", "refreshToken", "accessToken"];

/// Replace credential fields with a placeholder before logging
fn redact(mut value: serde_json::Value) -> serde_json::Value {
    if let Some(object) = value.as_object_mut() {
        for field in SENSITIVE_FIELDS {
            if object.contains_key(field) {
                object[field] = serde_json::Value::String("***".to_string());
            }
        }
    }
    value
}

/// Middleware to log request and response bodies in debug mode
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(body_str) {
                let safe = redact(json);
                debug!(
                    method = %parts.method,
                    uri = %parts.uri,
                    request_body = %serde_json::to_string_pretty(&safe)
                        .unwrap_or_else(|_| "<unprintable>".to_string()),
                    "Request"
                );
            } else {
                debug!(
                    method = %parts.method,
                    uri = %parts.uri,
                    request_body_len = bytes.len(),
                    "Request (non-JSON body omitted)"
                );
            }
        }
    }

    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();

    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        if let Ok(body_str) = std::str::from_utf8(&bytes) {
            if let Ok(json) = serde_json::from_str::<serde_json::Value>(body_str) {
                let safe = redact(json);
                debug!(
                    status = %parts.status,
                    response_body = %serde_json::to_string_pretty(&safe)
                        .unwrap_or_else(|_| "<unprintable>".to_string()),
                    "Response"
                );
            } else {
                debug!(
                    status = %parts.status,
                    response_body_len = bytes.len(),
                    "Response (non-JSON body omitted)"
                );
            }
        }
    }

    let response = Response::from_parts(parts, Body::from(bytes));

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::redact;

    #[test]
    fn test_redact_masks_credential_fields() {
        let body = serde_json::json!({
            "email": "a@x.com",
            "password": "secret1",
            "refreshToken": "eyJhbGciOiJIUzI1NiJ9.x.y",
        });

        let safe = redact(body);
        assert_eq!(safe["password"], "***");
        assert_eq!(safe["refreshToken"], "***");
        assert_eq!(safe["email"], "a@x.com");
    }

    #[test]
    fn test_redact_leaves_other_shapes_alone() {
        let body = serde_json::json!(["not", "an", "object"]);
        assert_eq!(redact(body.clone()), body);
    }
}
