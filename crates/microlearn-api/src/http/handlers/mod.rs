//! Route handlers.

pub mod categorize;
pub mod node;
pub mod outline;
pub mod screens;

use microlearn_core::dispatch::DEFAULT_PREFERRED_MODEL;
use microlearn_types::dispatch::{DispatchRequest, Payload};

use crate::http::error::AppError;
use crate::state::AppState;

/// Assemble a dispatch request from the configured headers, preferred model,
/// and candidate list. Fails when live mode has no API key.
fn dispatch_request(state: &AppState, payload: Payload) -> Result<DispatchRequest, AppError> {
    let headers = state.config.request_headers().ok_or_else(|| {
        AppError::Configuration("ANTHROPIC_API_KEY is not configured".to_string())
    })?;

    let preferred = state
        .config
        .dispatch
        .preferred_model
        .clone()
        .unwrap_or_else(|| DEFAULT_PREFERRED_MODEL.to_string());

    Ok(DispatchRequest::new(payload, headers)
        .with_preferred_model(preferred)
        .with_candidates(state.config.dispatch.candidates.clone()))
}
