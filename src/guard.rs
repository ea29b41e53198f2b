//! Navigation guard — decides forward vs. redirect before page logic runs.
//!
//! DESIGN
//! ======
//! The decision is a pure function of (pathname, cookie presence). Asset and
//! API paths are never subject to the credential check; explicitly public
//! pages pass regardless of session state; everything else requires the
//! session cookie to be present.
//!
//! The guard checks presence only. Token validity (signature, expiry,
//! revocation) is the backend's job on each API call — an unauthenticated
//! user with a stale cookie reaches the page shell but every data call 401s.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::state::AppState;

/// Session cookie set by the backend on login.
pub const SESSION_COOKIE: &str = "accessToken";

/// Redirect target for unauthenticated page requests. Bare URL, no
/// return-destination parameter.
pub const LOGIN_PATH: &str = "/auth/login";

/// Path prefixes that bypass the guard entirely: build assets, API routes,
/// favicon, logos, public files.
const SKIP_PREFIXES: &[&str] = &["/_next", "/api", "/favicon.ico", "/logos", "/public"];

/// Pages reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/auth/login", "/auth/forgot-password", "/auth/reset-password", "/403"];

// =============================================================================
// CONFIG
// =============================================================================

/// Immutable guard configuration, injected at router construction.
#[derive(Debug, Clone)]
pub struct GuardConfig {
    pub skip_prefixes: Vec<String>,
    pub public_paths: Vec<String>,
    pub login_path: String,
    pub cookie_name: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            skip_prefixes: SKIP_PREFIXES.iter().map(ToString::to_string).collect(),
            public_paths: PUBLIC_PATHS.iter().map(ToString::to_string).collect(),
            login_path: LOGIN_PATH.to_string(),
            cookie_name: SESSION_COOKIE.to_string(),
        }
    }
}

// =============================================================================
// DECISION
// =============================================================================

/// Outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Asset or API path; forwarded without a credential check.
    Skip,
    /// Explicitly public page; forwarded without a credential check.
    Public,
    /// No session cookie on a protected page; send to the login page.
    RedirectToLogin,
    /// Session cookie present; forward.
    Forward,
}

impl GuardConfig {
    /// Evaluate one request. First match wins: skip prefix, then paths
    /// containing a `.` (static file heuristic), then exact public paths,
    /// then cookie presence.
    #[must_use]
    pub fn decide(&self, pathname: &str, has_session: bool) -> GuardDecision {
        if self
            .skip_prefixes
            .iter()
            .any(|prefix| pathname.starts_with(prefix.as_str()))
        {
            return GuardDecision::Skip;
        }
        if pathname.contains('.') {
            return GuardDecision::Skip;
        }
        if self.public_paths.iter().any(|public| public == pathname) {
            return GuardDecision::Public;
        }
        if !has_session {
            return GuardDecision::RedirectToLogin;
        }
        GuardDecision::Forward
    }
}

// =============================================================================
// MIDDLEWARE
// =============================================================================

/// Axum middleware applying [`GuardConfig::decide`] to every incoming
/// request. Skip/public/forward pass the request through unchanged;
/// unauthenticated page requests short-circuit into a temporary redirect.
pub async fn session_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let has_session = jar.get(&state.guard.cookie_name).is_some();

    match state.guard.decide(request.uri().path(), has_session) {
        GuardDecision::RedirectToLogin => Redirect::temporary(&state.guard.login_path).into_response(),
        GuardDecision::Skip | GuardDecision::Public | GuardDecision::Forward => next.run(request).await,
    }
}

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;
