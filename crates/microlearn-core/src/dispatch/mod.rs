//! Model-fallback request dispatch.
//!
//! A dispatch walks an ordered, deduplicated list of model identifiers and
//! returns the first successful structured response. "Model not recognized"
//! is the only retryable backend rejection; everything else is fatal.

pub mod box_transport;
pub mod candidates;
pub mod dispatcher;
pub mod transport;

pub use box_transport::BoxTransport;
pub use candidates::{DEFAULT_CANDIDATES, DEFAULT_PREFERRED_MODEL, build_candidates};
pub use dispatcher::ModelDispatcher;
pub use transport::{MessagesTransport, TransportError, TransportReply};
