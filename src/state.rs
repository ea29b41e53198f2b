//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. Both
//! components it holds are stateless across requests, so the state is plain
//! Arc-wrapped values with no locks.

use std::sync::Arc;

use crate::api::ApiClient;
use crate::guard::GuardConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Session-aware client for the remote operations backend.
    pub api: Arc<ApiClient>,
    /// Navigation guard configuration.
    pub guard: Arc<GuardConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(api: ApiClient, guard: GuardConfig) -> Self {
        Self { api: Arc::new(api), guard: Arc::new(guard) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::{GuardDecision, LOGIN_PATH, SESSION_COOKIE};

    #[test]
    fn default_guard_config_matches_app_routes() {
        let state = test_helpers::test_app_state_unconfigured();
        assert_eq!(state.guard.login_path, LOGIN_PATH);
        assert_eq!(state.guard.cookie_name, SESSION_COOKIE);
        assert!(state.guard.public_paths.contains(&LOGIN_PATH.to_string()));
    }

    #[test]
    fn state_clone_shares_guard() {
        let state = test_helpers::test_app_state_unconfigured();
        let cloned = state.clone();
        assert_eq!(cloned.guard.decide("/projects", false), GuardDecision::RedirectToLogin);
        assert!(Arc::ptr_eq(&state.guard, &cloned.guard));
    }
}
