//! Transport implementations for the dispatcher.

pub mod http;
pub mod stub;

use microlearn_core::dispatch::BoxTransport;

use crate::config::Config;
use http::HttpTransport;
use stub::StubTransport;

/// Pick the transport for this process: the offline stub when
/// `MICROLEARN_STUB` is set, the live HTTP transport otherwise.
pub fn select_transport(config: &Config) -> BoxTransport {
    if config.stub_mode {
        tracing::info!("stub mode enabled, responses will be synthesized offline");
        BoxTransport::new(StubTransport::new())
    } else {
        BoxTransport::new(HttpTransport::new(config.dispatch.attempt_timeout()))
    }
}
