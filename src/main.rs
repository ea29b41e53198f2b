mod api;
mod guard;
mod routes;
mod state;

use std::sync::Arc;

/// Startup-registered session observer. The proxy layer produces the actual
/// login redirect per failing request; this hook records the expiry.
struct LogSessionExpiry;

impl api::SessionObserver for LogSessionExpiry {
    fn session_expired(&self) {
        tracing::warn!(login = guard::LOGIN_PATH, "session refresh failed, users must log in again");
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let config = api::ApiConfig::from_env();
    if config.base_url.is_none() {
        tracing::warn!("API_BASE_URL not set — backend proxying disabled");
    }
    let client = api::ApiClient::new(&config, Some(Arc::new(LogSessionExpiry))).expect("HTTP client build failed");

    let state = state::AppState::new(client, guard::GuardConfig::default());
    let site_root = routes::dashboard_dir();

    let app = routes::app(state, site_root);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "fibreops gateway listening");
    axum::serve(listener, app).await.expect("server failed");
}
