//! Backend API wire types and errors.
//!
//! ERROR HANDLING
//! ==============
//! Every failure path out of the client lands in exactly one [`ApiError`]
//! variant. `SessionExpired` is terminal for the current call; callers send
//! the user back to the login page. `Request` carries the most specific
//! message the backend provided, falling back to a generic string.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by backend API calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `API_BASE_URL` is not configured. Raised before any network I/O.
    #[error("backend base URL not configured (set API_BASE_URL)")]
    Configuration,

    /// The session refresh call failed after a 401; the caller must
    /// re-authenticate.
    #[error("session expired")]
    SessionExpired,

    /// Any other failed request: non-2xx status or transport failure.
    #[error("request failed: {message}")]
    Request {
        /// HTTP status, when the backend answered at all.
        status: Option<u16>,
        message: String,
    },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// REQUEST DESCRIPTOR
// =============================================================================

/// HTTP method for a backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl ApiMethod {
    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Request body. Owned and cloneable so the single post-refresh retry can
/// re-issue the identical request.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON payload, sent with `Content-Type: application/json`.
    Json(serde_json::Value),
    /// Raw bytes. When `content_type` is `None` the transport default
    /// applies (no header override).
    Bytes {
        data: Vec<u8>,
        content_type: Option<String>,
    },
}

/// Per-call options. Constructed once per call; the `retried` flag is
/// internal and guarantees the refresh-and-retry flow runs at most once.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: ApiMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub(crate) retried: bool,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn method(mut self, method: ApiMethod) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Response envelope used by the backend API:
/// `{ status: "success"|..., message?, data? }`.
///
/// The client surfaces `message` on failure and otherwise hands the whole
/// decoded body to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

// =============================================================================
// SESSION OBSERVER
// =============================================================================

/// Callback registered at client construction, notified when a session
/// refresh fails. The interactive front end reacts by navigating to the
/// login page; passing no observer makes expiry a silent error return.
pub trait SessionObserver: Send + Sync {
    fn session_expired(&self);
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
