use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        health::{livez, readyz},
        localities::{
            create_locality, delete_locality, get_locality, list_localities, update_locality,
        },
    },
    state::AppState,
};

/// Floor for the whole-request timeout; the per-request adapter deadline
/// normally fires well before it.
const MIN_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let http_timeout = state.request_timeout.max(MIN_HTTP_TIMEOUT);

    let locality_routes = Router::new()
        .route("/localities", get(list_localities).post(create_locality))
        .route(
            "/localities/{code}",
            get(get_locality)
                .put(update_locality)
                .delete(delete_locality),
        )
        .layer(cors);

    Router::new()
        .merge(locality_routes)
        .route("/livez", get(livez))
        .route("/readyz", get(readyz))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http_timeout,
        ))
        .with_state(state)
}
