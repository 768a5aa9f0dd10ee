//! Screen batch generation endpoint.
//!
//! POST /api/v1/screens - Generate a batch of learning screens for one
//! section of the curriculum.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use microlearn_core::generate::parse::parse_generated;
use microlearn_core::generate::prompt::{SCREENS_SYSTEM, screens_prompt};
use microlearn_core::generate::request_payload;
use microlearn_types::curriculum::Screen;

use crate::http::error::AppError;
use crate::http::response::{ApiErrorDetail, ApiResponse};
use crate::state::AppState;

const SCREENS_MAX_TOKENS: u32 = 2048;

/// Cap on screens per batch; keeps the generation inside the token budget.
const MAX_BATCH: u32 = 8;

#[derive(Debug, Deserialize)]
pub struct ScreensRequest {
    pub topic: String,
    pub lens: Option<String>,
    pub section_title: String,
    /// 0-based index of the first screen in the batch.
    pub start_idx: u32,
    pub count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScreensBatch {
    pub screens: Vec<Screen>,
}

pub async fn generate_screens(
    State(state): State<AppState>,
    Json(req): Json<ScreensRequest>,
) -> Result<Json<ApiResponse<ScreensBatch>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    if req.topic.trim().is_empty() {
        return Err(AppError::Validation("topic is required".to_string()));
    }
    if req.count == 0 || req.count > MAX_BATCH {
        return Err(AppError::Validation(format!(
            "count must be between 1 and {MAX_BATCH}"
        )));
    }

    let prompt = screens_prompt(
        &req.topic,
        req.lens.as_deref(),
        &req.section_title,
        req.start_idx,
        req.count,
    );
    let payload = request_payload(Some(SCREENS_SYSTEM), &prompt, SCREENS_MAX_TOKENS);
    let dispatch = super::dispatch_request(&state, payload)?;

    // Generation failures degrade to an empty batch rather than erroring;
    // the client renders what it has and shows the error alongside.
    let generated = match state.dispatcher.dispatch(&dispatch).await {
        Ok(body) => parse_generated::<ScreensBatch>(&body).map_err(AppError::from),
        Err(err) => Err(AppError::from(err)),
    };

    let elapsed = start.elapsed().as_millis() as u64;
    match generated {
        Ok(batch) => {
            tracing::info!(
                topic = %req.topic,
                section = %req.section_title,
                screens = batch.screens.len(),
                "screen batch generated"
            );
            Ok(Json(ApiResponse::success(batch, request_id, elapsed)))
        }
        Err(err) => {
            let (_, code, message) = err.parts();
            tracing::warn!(
                topic = %req.topic,
                section = %req.section_title,
                code,
                "screen generation failed, returning empty batch: {message}"
            );
            Ok(Json(ApiResponse::degraded(
                ScreensBatch {
                    screens: Vec::new(),
                },
                ApiErrorDetail::new(code, message),
                request_id,
                elapsed,
            )))
        }
    }
}
