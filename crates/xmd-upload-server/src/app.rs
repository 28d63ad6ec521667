//! Router construction.

use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::handlers;

/// Create the application router. Every route requires Basic auth.
pub(crate) fn create_router() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/form", post(handlers::form))
        .layer(middleware::from_fn(auth::require_basic_auth))
        .layer(TraceLayer::new_for_http())
}
