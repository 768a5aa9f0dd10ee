//! BoxTransport -- object-safe dynamic dispatch wrapper for MessagesTransport.
//!
//! Pattern:
//! 1. Define an object-safe `MessagesTransportDyn` trait with boxed futures
//! 2. Blanket-impl `MessagesTransportDyn` for all `T: MessagesTransport`
//! 3. `BoxTransport` wraps `Box<dyn MessagesTransportDyn>` and delegates
//!
//! This is what lets the application pick the live HTTP transport or the
//! offline stub at startup without making everything downstream generic.

use std::future::Future;
use std::pin::Pin;

use microlearn_types::dispatch::HeaderSet;
use serde_json::Value;

use super::transport::{MessagesTransport, TransportError, TransportReply};

/// Object-safe version of [`MessagesTransport`] with boxed futures.
pub trait MessagesTransportDyn: Send + Sync {
    fn send_boxed<'a>(
        &'a self,
        body: &'a Value,
        headers: &'a HeaderSet,
    ) -> Pin<Box<dyn Future<Output = Result<TransportReply, TransportError>> + Send + 'a>>;
}

/// Blanket implementation: any `MessagesTransport` automatically implements
/// `MessagesTransportDyn`.
impl<T: MessagesTransport> MessagesTransportDyn for T {
    fn send_boxed<'a>(
        &'a self,
        body: &'a Value,
        headers: &'a HeaderSet,
    ) -> Pin<Box<dyn Future<Output = Result<TransportReply, TransportError>> + Send + 'a>> {
        Box::pin(self.send(body, headers))
    }
}

/// Type-erased transport for runtime selection (live HTTP vs offline stub).
pub struct BoxTransport {
    inner: Box<dyn MessagesTransportDyn + Send + Sync>,
}

impl BoxTransport {
    /// Wrap a concrete `MessagesTransport` in a type-erased box.
    pub fn new<T: MessagesTransport + 'static>(transport: T) -> Self {
        Self {
            inner: Box::new(transport),
        }
    }
}

impl MessagesTransport for BoxTransport {
    async fn send(
        &self,
        body: &Value,
        headers: &HeaderSet,
    ) -> Result<TransportReply, TransportError> {
        self.inner.send_boxed(body, headers).await
    }
}
