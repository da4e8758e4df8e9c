//! Key validation endpoint.

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};

/// Find the presented API key: the first configured header with a non-empty
/// value wins. Values are trimmed of surrounding whitespace.
fn extract_key<'a>(headers: &'a HeaderMap, names: &[String]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        headers
            .get(name.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    })
}

/// GET /auth - Return 200 when the presented key is accepted, 401 otherwise.
///
/// An absent header is treated as an empty key, which is never accepted.
pub async fn check_key(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    let Some(key) = extract_key(&headers, &state.config.keys.headers) else {
        return Err(ApiError::Unauthorized("missing api key".to_string()));
    };

    if state.keys.contains(key).await {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::Unauthorized("unknown api key".to_string()))
    }
}
