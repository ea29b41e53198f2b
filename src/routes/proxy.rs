//! Backend proxy — forwards `/api/*` calls through the session-aware client.
//!
//! ERROR HANDLING
//! ==============
//! Session expiry surfaces as a full-page redirect to the login screen.
//! Every other client failure maps to a JSON error body with the upstream
//! status when one exists, 502 for transport failures, 503 when the backend
//! is not configured at all.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Redirect, Response};

use crate::api::{ApiError, RequestBody, RequestOptions};
use crate::state::AppState;

/// `ANY /api/{*path}` — forward to the backend, stripping the `/api` prefix.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(rest): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = match query {
        Some(query) => format!("/{rest}?{query}"),
        None => format!("/{rest}"),
    };
    let body = request_body(&headers, body);

    let result = match method {
        Method::GET => state.api.get(&path, RequestOptions::new()).await,
        Method::POST => state.api.post(&path, body, RequestOptions::new()).await,
        Method::PUT => state.api.put(&path, body, RequestOptions::new()).await,
        Method::DELETE => state.api.delete(&path, RequestOptions::new()).await,
        _ => return StatusCode::METHOD_NOT_ALLOWED.into_response(),
    };

    match result {
        Ok(payload) => Json(payload).into_response(),
        Err(error) => error_response(&state, &path, &error),
    }
}

/// Turn the incoming request body into a client body. JSON stays JSON;
/// anything else is forwarded as raw bytes with the caller's content type
/// (or none, letting the transport default apply).
fn request_body(headers: &HeaderMap, body: Bytes) -> Option<RequestBody> {
    if body.is_empty() {
        return None;
    }
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    if content_type.as_deref().is_some_and(|ct| ct.starts_with("application/json")) {
        if let Ok(value) = serde_json::from_slice(&body) {
            return Some(RequestBody::Json(value));
        }
    }
    Some(RequestBody::Bytes { data: body.to_vec(), content_type })
}

fn error_response(state: &AppState, path: &str, error: &ApiError) -> Response {
    match error {
        ApiError::SessionExpired => {
            tracing::warn!(%path, "backend session expired, redirecting to login");
            Redirect::temporary(&state.guard.login_path).into_response()
        }
        ApiError::Configuration => {
            tracing::error!(%path, "backend call without configured base URL");
            error_json(StatusCode::SERVICE_UNAVAILABLE, &error.to_string())
        }
        ApiError::Request { status, message } => {
            tracing::warn!(%path, status = ?status, %message, "backend request failed");
            let code = status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            error_json(code, message)
        }
        ApiError::HttpClientBuild(message) => {
            tracing::error!(%path, %message, "HTTP client unavailable");
            error_json(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

fn error_json(code: StatusCode, message: &str) -> Response {
    (code, Json(serde_json::json!({ "status": "error", "message": message }))).into_response()
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
