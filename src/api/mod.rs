//! Backend API access — session-aware HTTP client for the operations API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The remote backend owns all business logic (projects, clients, staff,
//! inventory, fleet, faults); this module is the gateway's only path to it.
//! Session renewal is transparent: a 401 triggers one refresh call and one
//! retry before the failure surfaces to the caller.

pub mod client;
pub mod config;
pub mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use types::{ApiError, ApiMethod, Envelope, RequestBody, RequestOptions, SessionObserver};
