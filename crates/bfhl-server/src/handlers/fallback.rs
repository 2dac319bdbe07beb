//! Envelope responses for unrouted requests and escaped panics.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::extract::{Request, State};
use axum::http::Uri;
use axum::middleware::Next;
use axum::response::Response;
use futures::FutureExt;

use crate::error::ApiError;
use crate::schema::envelope::error_response;
use crate::state::AppState;

/// Any path without a route.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    error_response(state.official_email(), &ApiError::NotFound, uri.path())
}

/// A routed path hit with an unsupported method.
pub async fn method_not_allowed(State(state): State<AppState>, uri: Uri) -> Response {
    error_response(state.official_email(), &ApiError::MethodNotAllowed, uri.path())
}

/// Middleware turning a handler panic into a 500 envelope.
pub async fn catch_panic(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();
    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let err = ApiError::Internal(panic_message(payload.as_ref()));
            error_response(state.official_email(), &err, &path)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
