//! Knowledge-node endpoints.
//!
//! POST /api/v1/nodes - Save a completed screen as a knowledge node.
//! GET  /api/v1/nodes - List nodes, optionally filtered by category.
//! GET  /api/v1/nodes/trends - Per-topic completion counts.

use std::time::Instant;

use axum::Json;
use axum::extract::{Query, State};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use microlearn_core::store::NodeStore;
use microlearn_types::node::{Category, KnowledgeNode, TopicTrend};

use crate::http::error::AppError;
use crate::http::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SaveNodeRequest {
    /// Existing node id to overwrite; omitted for new nodes.
    pub id: Option<Uuid>,
    pub topic: String,
    pub headline: String,
    pub body: String,
    /// Category label; anything outside the fixed set folds to Default.
    pub category: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
}

pub async fn save_node(
    State(state): State<AppState>,
    Json(req): Json<SaveNodeRequest>,
) -> Result<Json<ApiResponse<KnowledgeNode>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    if req.topic.trim().is_empty() {
        return Err(AppError::Validation("topic is required".to_string()));
    }
    if req.headline.trim().is_empty() {
        return Err(AppError::Validation("headline is required".to_string()));
    }

    let node = KnowledgeNode {
        id: req.id.unwrap_or_else(Uuid::now_v7),
        topic: req.topic,
        headline: req.headline,
        body: req.body,
        category: req
            .category
            .as_deref()
            .map(Category::from_label_or_default)
            .unwrap_or(Category::Default),
        completed_at: req.completed_at.unwrap_or_else(Utc::now),
    };

    state.node_store.save(&node).await?;

    tracing::debug!(id = %node.id, category = %node.category, "knowledge node saved");

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(node, request_id, elapsed)))
}

#[derive(Debug, Deserialize)]
pub struct ListNodesQuery {
    pub category: Option<String>,
}

pub async fn list_nodes(
    State(state): State<AppState>,
    Query(query): Query<ListNodesQuery>,
) -> Result<Json<ApiResponse<Vec<KnowledgeNode>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let nodes = match query.category.as_deref() {
        Some(label) => {
            let category = label
                .parse::<Category>()
                .map_err(AppError::Validation)?;
            state.node_store.list_by_category(category).await?
        }
        None => state.node_store.list().await?,
    };

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(nodes, request_id, elapsed)))
}

pub async fn trend_topics(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TopicTrend>>>, AppError> {
    let start = Instant::now();
    let request_id = uuid::Uuid::now_v7().to_string();

    let trends = state.node_store.trend_topics().await?;

    let elapsed = start.elapsed().as_millis() as u64;
    Ok(Json(ApiResponse::success(trends, request_id, elapsed)))
}
