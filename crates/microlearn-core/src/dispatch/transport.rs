//! Transport seam for the dispatcher.
//!
//! The dispatcher never talks to the network directly; it sends through a
//! [`MessagesTransport`]. The live implementation (reqwest) and the offline
//! stub live in microlearn-infra. Uses RPITIT (native async fn in traits,
//! Rust 2024 edition).

use microlearn_types::dispatch::HeaderSet;
use serde_json::Value;

/// A raw reply from the backend: status code plus unparsed body text.
///
/// The body is kept as text so the dispatcher can apply its own
/// parse-or-wrap policy instead of failing on non-JSON bodies.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: String,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport-level failure: no usable response came back at all
/// (DNS, connect, timeout, broken body read).
#[derive(Debug, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// One request/response exchange with the messages endpoint.
///
/// Implementations must not retry internally; retry policy belongs to the
/// dispatcher.
pub trait MessagesTransport: Send + Sync {
    fn send(
        &self,
        body: &Value,
        headers: &HeaderSet,
    ) -> impl std::future::Future<Output = Result<TransportReply, TransportError>> + Send;
}
