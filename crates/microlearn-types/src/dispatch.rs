//! Request and error shapes for the model-fallback dispatcher.
//!
//! The payload is an opaque JSON mapping: the dispatcher only ever touches
//! its `model` key, everything else passes through to the backend untouched.

use std::collections::BTreeMap;

use serde_json::Value;

/// Opaque request body fields (message list, token limit, system preamble).
///
/// Any `model` key present here is overwritten per attempt.
pub type Payload = serde_json::Map<String, Value>;

/// Transport headers passed through to the backend unchanged.
///
/// Expected to carry the API key, protocol version, and content type.
pub type HeaderSet = BTreeMap<String, String>;

/// One logical request to the generative backend.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    pub payload: Payload,
    pub headers: HeaderSet,
    /// Model identifier to try first, prepended to the candidate list.
    pub preferred_model: Option<String>,
    /// Explicit candidate list; empty means use the built-in defaults.
    pub candidates: Vec<String>,
}

impl DispatchRequest {
    /// Request with the default candidate list and no preferred model.
    pub fn new(payload: Payload, headers: HeaderSet) -> Self {
        Self {
            payload,
            headers,
            preferred_model: None,
            candidates: Vec::new(),
        }
    }

    pub fn with_preferred_model(mut self, model: impl Into<String>) -> Self {
        self.preferred_model = Some(model.into());
        self
    }

    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }
}

/// Terminal outcomes of a dispatch loop.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The backend rejected the request for a reason other than an
    /// unrecognized model. Not retried.
    #[error("backend rejected request with HTTP {status}")]
    RequestFailed { status: u16, body: Value },

    /// Every candidate was either unrecognized by the backend or
    /// unreachable; no model accepted the request.
    #[error("no candidate model accepted the request ({attempts} attempts)")]
    AllCandidatesExhausted { attempts: usize },

    /// The overall deadline for the candidate loop elapsed.
    #[error("dispatch deadline of {deadline_ms}ms exceeded")]
    DeadlineExceeded { deadline_ms: u64 },
}
