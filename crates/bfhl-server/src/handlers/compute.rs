//! The compute endpoint.

use axum::extract::rejection::JsonRejection;
use axum::extract::{OriginalUri, State};
use axum::response::Response;
use axum::Json;
use bfhl_core::FunctionRequestBody;
use serde_json::json;

use crate::error::ApiError;
use crate::schema::envelope::respond;
use crate::state::AppState;

/// Runs one computation selected by the single key in the body.
///
/// `POST /bfhl`
pub async fn compute(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    payload: Result<Json<FunctionRequestBody>, JsonRejection>,
) -> Response {
    let result = match payload {
        Ok(Json(body)) => state.service.dispatch(body).await,
        Err(rejection) => Err(validation_error(&rejection)),
    };
    respond(state.official_email(), uri.path(), result)
}

fn validation_error(rejection: &JsonRejection) -> ApiError {
    let kind = match rejection {
        JsonRejection::JsonDataError(_) => "json_data_error",
        JsonRejection::JsonSyntaxError(_) => "json_syntax_error",
        JsonRejection::MissingJsonContentType(_) => "missing_json_content_type",
        JsonRejection::BytesRejection(_) => "bytes_rejection",
        _ => "invalid_body",
    };
    tracing::debug!(kind, "rejected compute body: {}", rejection.body_text());
    ApiError::ValidationFailed(json!([{ "type": kind, "msg": rejection.body_text() }]))
}
