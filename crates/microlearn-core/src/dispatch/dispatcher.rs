//! The model-fallback dispatcher.
//!
//! One dispatch is a sequential loop over the candidate models: send the
//! payload with `model` set to the candidate, return the first successful
//! parsed body, advance past "model not found" rejections and transport
//! failures, abort on anything else. The dispatcher is stateless and
//! reentrant; every invocation owns its own loop.

use std::time::Duration;

use serde_json::{Value, json};

use microlearn_types::dispatch::{DispatchError, DispatchRequest};

use super::candidates::build_candidates;
use super::transport::MessagesTransport;

/// Default overall deadline across the whole candidate loop. Per-attempt
/// timeouts are the transport's job.
const DEFAULT_OVERALL_DEADLINE: Duration = Duration::from_secs(120);

/// Delivers a single logical request to the generative backend, masking
/// backend-side model-availability changes from the caller.
pub struct ModelDispatcher<T> {
    transport: T,
    overall_deadline: Duration,
}

impl<T: MessagesTransport> ModelDispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            overall_deadline: DEFAULT_OVERALL_DEADLINE,
        }
    }

    /// Override the overall deadline for the candidate loop.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.overall_deadline = deadline;
        self
    }

    /// Run the candidate loop to its first success or a terminal error.
    ///
    /// Returns the parsed success body, or:
    /// - [`DispatchError::RequestFailed`] on the first non-retryable
    ///   backend rejection (no further candidates are tried),
    /// - [`DispatchError::AllCandidatesExhausted`] when every candidate was
    ///   unrecognized or unreachable,
    /// - [`DispatchError::DeadlineExceeded`] when the loop outlives the
    ///   overall deadline.
    pub async fn dispatch(&self, request: &DispatchRequest) -> Result<Value, DispatchError> {
        match tokio::time::timeout(self.overall_deadline, self.run(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(DispatchError::DeadlineExceeded {
                deadline_ms: self.overall_deadline.as_millis() as u64,
            }),
        }
    }

    async fn run(&self, request: &DispatchRequest) -> Result<Value, DispatchError> {
        let models = build_candidates(request.preferred_model.as_deref(), &request.candidates);
        let mut attempts = 0usize;

        for model in &models {
            attempts += 1;

            // Only the `model` key changes between attempts; the caller's
            // payload fields pass through untouched.
            let mut body = request.payload.clone();
            body.insert("model".to_string(), Value::String(model.clone()));
            let body = Value::Object(body);

            let reply = match self.transport.send(&body, &request.headers).await {
                Ok(reply) => reply,
                Err(err) => {
                    tracing::warn!(
                        model = %model,
                        error = %err,
                        "no response from backend, trying next candidate"
                    );
                    continue;
                }
            };

            let parsed = parse_reply_body(&reply.body);

            if reply.is_success() {
                tracing::debug!(model = %model, attempts, "model accepted request");
                return Ok(parsed);
            }

            if is_model_not_found(reply.status, &parsed) {
                tracing::warn!(model = %model, "model not recognized, trying next candidate");
                continue;
            }

            tracing::error!(
                model = %model,
                status = reply.status,
                "backend rejected request, not retrying"
            );
            return Err(DispatchError::RequestFailed {
                status: reply.status,
                body: parsed,
            });
        }

        Err(DispatchError::AllCandidatesExhausted { attempts })
    }
}

/// Parse a reply body as JSON, wrapping unparseable text instead of failing.
fn parse_reply_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

/// The one retryable backend rejection: a 404 specifically classified as
/// `not_found_error` by the backend's error object. A generic 404 without
/// that classification is fatal like any other rejection.
fn is_model_not_found(status: u16, body: &Value) -> bool {
    status == 404 && body["error"]["type"] == "not_found_error"
}
