//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Key check; the root route is kept for clients that probe "/"
        .route("/auth", get(handlers::check_key))
        .route("/", get(handlers::check_key))
        // Re-read the key file and swap the in-memory set
        .route("/refresh", get(handlers::refresh_keys))
        // Health check (intentionally unauthenticated for load balancers/k8s probes)
        .route("/health", get(handlers::health_check));

    // Conditionally expose the key listing based on config.
    if state.config.server.list_keys_enabled {
        router = router.route("/apikeys", get(handlers::list_keys));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
