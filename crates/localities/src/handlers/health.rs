//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (store ping)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::{context::RequestScope, state::AppState};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Pings the store under the request's deadline. Returns 200 if it answers,
/// 503 otherwise. The cache is not checked: reads degrade to the store.
#[axum::debug_handler(state = AppState)]
pub async fn readyz(State(state): State<AppState>, RequestScope(ctx): RequestScope) -> Response {
    let result = match ctx.scope(state.store.ping()).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(()) => (StatusCode::OK, Json(json!({ "ready": true }))).into_response(),
        Err(error) => {
            tracing::warn!(request_id = %ctx.request_id, %error, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "ready": false, "error": error })),
            )
                .into_response()
        }
    }
}
