//! Router assembly for the bfhl HTTP API.
//!
//! [`build_router`] wires the handlers to their routes with CORS, tracing
//! and panic-to-envelope middleware.

use axum::http::Method;
use axum::routing::{get, post};
use axum::{middleware, Router};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router.
///
/// CORS mirrors the caller's origin and headers so credentials stay allowed.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request());

    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/bfhl", post(handlers::compute::compute))
        .fallback(handlers::fallback::not_found)
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            handlers::fallback::catch_panic,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
