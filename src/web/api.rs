// src/web/api.rs
// HTTP handlers

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::envelope::{COACH_KEY, LESSON_KEY, ResponseEnvelope};
use super::error::ApiError;
use super::state::AppState;
use crate::error::{CoachError, Result};
use crate::pipeline::{CoachRequest, LessonRequest};

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

/// Liveness check; touches neither templates nor the provider
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ═══════════════════════════════════════
// PIPELINES
// ═══════════════════════════════════════

pub async fn generate_lesson(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let req: LessonRequest = match parse_json_body(&headers, &body) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    respond(LESSON_KEY, state.pipeline.generate_lesson(&req).await)
}

pub async fn coach(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let req: CoachRequest = match parse_json_body(&headers, &body) {
        Ok(req) => req,
        Err(e) => return e.into_response(),
    };

    respond(COACH_KEY, state.pipeline.coach(&req).await)
}

/// Decode a JSON body. A missing `Content-Type` is read as JSON; any other
/// non-JSON media type is refused with 415.
fn parse_json_body<T: DeserializeOwned>(
    headers: &HeaderMap,
    body: &Bytes,
) -> std::result::Result<T, ApiError> {
    if let Some(value) = headers.get(CONTENT_TYPE) {
        let content_type = value.to_str().unwrap_or_default().to_ascii_lowercase();
        let essence = content_type.split(';').next().unwrap_or_default().trim();
        if !(essence == "application/json" || essence.ends_with("+json")) {
            return Err(ApiError::custom(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "Expected request with `Content-Type: application/json`",
            ));
        }
    }

    let Json(req) = Json::<T>::from_bytes(body)?;
    Ok(req)
}

/// Schema violations are request rejections; every other failure becomes a
/// 200 with `{ok: false}`.
fn respond(key: &'static str, result: Result<String>) -> Response {
    match result {
        Err(e @ CoachError::SchemaViolation { .. }) => ApiError::from(e).into_response(),
        result => Json(ResponseEnvelope::from_result(key, result)).into_response(),
    }
}
