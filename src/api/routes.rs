//! HTTP API route definitions.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health, list_users, root, status, AppState};

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        // Health endpoint
        .route("/health", get(health))
        // Demo data endpoints
        .route("/api/users", get(list_users))
        .route("/api/status", get(status))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS so the browser frontend can call from any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
