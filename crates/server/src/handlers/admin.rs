//! Administrative endpoints: key reload and listing.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

/// Response for a successful key reload.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub status: &'static str,
    /// Number of keys accepted after the reload.
    pub keys_loaded: usize,
}

/// GET /refresh - Re-read the key file and atomically replace the key set.
///
/// On I/O failure the previous key set stays in effect and the error is
/// reported with a 500.
pub async fn refresh_keys(State(state): State<AppState>) -> ApiResult<Json<RefreshResponse>> {
    let keys_loaded = state.reload_keys().await.inspect_err(|error| {
        tracing::error!(%error, "Key reload failed, previous key set retained");
    })?;

    tracing::info!(keys_loaded, "Key set reloaded");
    Ok(Json(RefreshResponse {
        status: "ok",
        keys_loaded,
    }))
}

/// GET /apikeys - List the currently accepted keys, newline-joined.
///
/// Sorted for stable output; the underlying set is unordered.
pub async fn list_keys(State(state): State<AppState>) -> String {
    let mut keys = state.keys.snapshot().await;
    keys.sort();
    keys.join("\n")
}
