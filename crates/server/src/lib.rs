//! HTTP API server for the keygate API-key validation service.
//!
//! This crate provides the HTTP facade over the key set:
//! - Key validation endpoint
//! - Key file reload with atomic swap
//! - Key listing
//! - Health check

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
