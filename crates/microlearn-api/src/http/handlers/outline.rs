//! Curriculum outline generation endpoint.
//!
//! POST /api/v1/outline - Generate a microlearning curriculum outline for a
//! topic, optionally through a lens.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use microlearn_core::generate::parse::parse_generated;
use microlearn_core::generate::prompt::{OUTLINE_SYSTEM, outline_prompt};
use microlearn_core::generate::request_payload;
use microlearn_types::curriculum::CurriculumOutline;

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

const OUTLINE_MAX_TOKENS: u32 = 1024;

#[derive(Debug, Deserialize)]
pub struct OutlineRequest {
    pub topic: String,
    pub lens: Option<String>,
}

pub async fn generate_outline(
    State(state): State<AppState>,
    Json(req): Json<OutlineRequest>,
) -> Result<Json<ApiResponse<CurriculumOutline>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    if req.topic.trim().is_empty() {
        return Err(AppError::Validation("topic is required".to_string()));
    }

    let prompt = outline_prompt(&req.topic, req.lens.as_deref());
    let payload = request_payload(Some(OUTLINE_SYSTEM), &prompt, OUTLINE_MAX_TOKENS);
    let dispatch = super::dispatch_request(&state, payload)?;

    let body = state.dispatcher.dispatch(&dispatch).await?;
    let outline: CurriculumOutline = parse_generated(&body)?;

    tracing::info!(topic = %req.topic, sections = outline.sections.len(), "outline generated");

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(outline, request_id, elapsed)))
}
