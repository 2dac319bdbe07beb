//! Liveness probe.

use axum::extract::State;
use axum::Json;

use crate::schema::envelope::ResponseEnvelope;
use crate::state::AppState;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<ResponseEnvelope<()>> {
    Json(ResponseEnvelope::bare(state.official_email()))
}
