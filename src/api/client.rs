//! Session-aware backend HTTP client.
//!
//! DESIGN
//! ======
//! One `fetch` primitive backs the `get`/`post`/`put`/`delete` operations.
//! Every request is credentialed (cookie store enabled). On a 401 the client
//! performs exactly one refresh call against a fixed endpoint and re-issues
//! the original request exactly once; the `retried` flag on the request
//! descriptor rules out a second refresh. A failed refresh is terminal for
//! the call and notifies the registered session observer.
//!
//! Independent calls share no state beyond the cookie jar, so concurrent
//! 401s each run their own refresh. Refresh coalescing is deliberately not
//! implemented; the backend tolerates repeated refresh calls.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;

use super::config::ApiConfig;
use super::types::{ApiError, ApiMethod, Envelope, RequestBody, RequestOptions, SessionObserver};

/// Fixed session refresh endpoint. POST, no request body; only the response
/// status matters.
const REFRESH_PATH: &str = "/refresh/refresh-token";

const GENERIC_FAILURE: &str = "request to backend failed";

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Option<String>,
    observer: Option<Arc<dyn SessionObserver>>,
}

impl ApiClient {
    /// Build a client from config. The observer, when given, is notified on
    /// session expiry (failed refresh).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::HttpClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig, observer: Option<Arc<dyn SessionObserver>>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url.clone(), observer })
    }

    /// `GET path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<serde_json::Value, ApiError> {
        self.fetch(path, options.method(ApiMethod::Get)).await
    }

    /// `POST path` with an optional body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn post(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch(path, options.method(ApiMethod::Post).body(body)).await
    }

    /// `PUT path` with an optional body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn put(
        &self,
        path: &str,
        body: Option<RequestBody>,
        options: RequestOptions,
    ) -> Result<serde_json::Value, ApiError> {
        self.fetch(path, options.method(ApiMethod::Put).body(body)).await
    }

    /// `DELETE path`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch`].
    pub async fn delete(&self, path: &str, options: RequestOptions) -> Result<serde_json::Value, ApiError> {
        self.fetch(path, options.method(ApiMethod::Delete)).await
    }

    /// Issue one backend call, refreshing the session and retrying once on a
    /// 401. Returns the decoded response body on success.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Configuration`] when no base URL is configured (checked
    ///   before any network I/O).
    /// - [`ApiError::SessionExpired`] when the first attempt got a 401 and
    ///   the refresh call failed. The session observer fires first.
    /// - [`ApiError::Request`] for every other non-2xx status or transport
    ///   failure, including a 401 on the retried attempt.
    pub async fn fetch(&self, path: &str, mut options: RequestOptions) -> Result<serde_json::Value, ApiError> {
        let base = self.base_url.as_deref().ok_or(ApiError::Configuration)?;
        if path.is_empty() {
            return Err(ApiError::Request { status: None, message: "empty request path".into() });
        }

        let url = format!("{base}{path}");
        let response = self.issue(&url, &options).await?;

        if response.status() == StatusCode::UNAUTHORIZED && !options.retried {
            if !self.refresh_session(base).await {
                if let Some(observer) = &self.observer {
                    observer.session_expired();
                }
                return Err(ApiError::SessionExpired);
            }
            options.retried = true;
            let retried = self.issue(&url, &options).await?;
            return decode(retried).await;
        }

        decode(response).await
    }

    /// Send a single HTTP request. Transport failures normalize to
    /// [`ApiError::Request`] with no status.
    async fn issue(&self, url: &str, options: &RequestOptions) -> Result<reqwest::Response, ApiError> {
        let mut request = self.http.request(options.method.as_reqwest(), url);
        for (name, value) in &options.headers {
            request = request.header(name, value);
        }
        match &options.body {
            Some(RequestBody::Json(value)) => request = request.json(value),
            Some(RequestBody::Bytes { data, content_type }) => {
                request = request.body(data.clone());
                if let Some(ct) = content_type {
                    request = request.header(CONTENT_TYPE, ct);
                }
            }
            None => {}
        }
        request
            .send()
            .await
            .map_err(|e| ApiError::Request { status: None, message: e.to_string() })
    }

    /// One refresh attempt. Success is any 2xx status; the response body is
    /// never inspected.
    async fn refresh_session(&self, base: &str) -> bool {
        match self.http.post(format!("{base}{REFRESH_PATH}")).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

// =============================================================================
// RESPONSE DECODING
// =============================================================================

/// Decode a backend response: success returns the whole JSON body, failure
/// surfaces the envelope `message` when one parses out of the body.
async fn decode(response: reqwest::Response) -> Result<serde_json::Value, ApiError> {
    let status = response.status();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Request { status: Some(status.as_u16()), message: e.to_string() })?;

    if status.is_success() {
        if bytes.is_empty() {
            return Ok(serde_json::Value::Null);
        }
        return serde_json::from_slice(&bytes).map_err(|e| ApiError::Request {
            status: Some(status.as_u16()),
            message: format!("response body parse failed: {e}"),
        });
    }

    Err(ApiError::Request { status: Some(status.as_u16()), message: failure_message(&bytes) })
}

fn failure_message(body: &[u8]) -> String {
    serde_json::from_slice::<Envelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
