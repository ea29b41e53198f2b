//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway serves the pre-built dashboard frontend as static files and
//! forwards `/api` calls to the remote operations backend. The navigation
//! guard wraps the whole router; its skip rules keep `/api` and asset paths
//! out of the credential check so ordering matches the guard contract.

pub mod proxy;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{any, get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::guard;
use crate::state::AppState;

/// Resolve the dashboard build directory served at `/`.
#[must_use]
pub fn dashboard_dir() -> PathBuf {
    std::env::var("DASHBOARD_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./dashboard"))
}

/// Full gateway router: backend proxy under `/api`, dashboard static files
/// everywhere else, navigation guard over both.
pub fn app(state: AppState, site_root: PathBuf) -> Router {
    let dashboard = ServeDir::new(site_root).append_index_html_on_directories(true);

    Router::new()
        .route("/api/healthz", get(healthz))
        .route("/api/{*path}", any(proxy::forward))
        .fallback_service(dashboard)
        .layer(axum::middleware::from_fn_with_state(state.clone(), guard::session_guard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
