//! Screen categorization endpoint.
//!
//! POST /api/v1/categorize - File a completed screen under one category from
//! the fixed set. This endpoint never fails the request: any dispatcher or
//! configuration problem degrades to `Category::Default` so the client's
//! save flow keeps working.

use std::time::Instant;

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use microlearn_core::generate::parse::parse_text;
use microlearn_core::generate::prompt::categorize_prompt;
use microlearn_core::generate::request_payload;
use microlearn_types::node::Category;

use crate::http::response::ApiResponse;
use crate::state::AppState;

const CATEGORIZE_MAX_TOKENS: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct CategorizeRequest {
    pub headline: String,
    pub body: String,
    pub topic: String,
}

#[derive(Debug, Serialize)]
pub struct CategorizeResponse {
    pub category: Category,
}

pub async fn categorize_screen(
    State(state): State<AppState>,
    Json(req): Json<CategorizeRequest>,
) -> Json<ApiResponse<CategorizeResponse>> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let category = resolve_category(&state, &req).await;

    let elapsed = start.elapsed().as_millis() as u64;
    Json(ApiResponse::success(
        CategorizeResponse { category },
        request_id,
        elapsed,
    ))
}

/// Ask the backend for a category, folding every failure to `Default`.
async fn resolve_category(state: &AppState, req: &CategorizeRequest) -> Category {
    let prompt = categorize_prompt(&req.headline, &req.body, &req.topic);
    let payload = request_payload(None, &prompt, CATEGORIZE_MAX_TOKENS);

    let dispatch = match super::dispatch_request(state, payload) {
        Ok(dispatch) => dispatch,
        Err(_) => {
            tracing::warn!("categorization unavailable without API key, using Default");
            return Category::Default;
        }
    };

    let body = match state.dispatcher.dispatch(&dispatch).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "categorization dispatch failed, using Default");
            return Category::Default;
        }
    };

    match parse_text(&body) {
        Ok(label) => Category::from_label_or_default(&label),
        Err(err) => {
            tracing::warn!(error = %err, "categorization response unusable, using Default");
            Category::Default
        }
    }
}
