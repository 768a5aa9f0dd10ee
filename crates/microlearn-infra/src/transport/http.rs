//! Live reqwest transport to the upstream messages endpoint.
//!
//! One request/response exchange per `send`; the per-attempt timeout lives
//! here on the client, retry policy lives in the dispatcher.

use std::time::Duration;

use serde_json::Value;

use microlearn_core::dispatch::{MessagesTransport, TransportError, TransportReply};
use microlearn_types::dispatch::HeaderSet;

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
const MESSAGES_PATH: &str = "/v1/messages";

/// HTTP transport for the messages API.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport with the given per-attempt timeout.
    pub fn new(attempt_timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(attempt_timeout)
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, MESSAGES_PATH)
    }
}

impl MessagesTransport for HttpTransport {
    async fn send(
        &self,
        body: &Value,
        headers: &HeaderSet,
    ) -> Result<TransportReply, TransportError> {
        let mut request = self.client.post(self.url()).json(body);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        // Body read first as text; the dispatcher owns the parse policy.
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(format!("failed to read response body: {e}")))?;

        Ok(TransportReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let transport = HttpTransport::new(Duration::from_secs(5))
            .with_base_url("http://localhost:8080".to_string());
        assert_eq!(transport.url(), "http://localhost:8080/v1/messages");
    }

    #[test]
    fn default_base_url_is_upstream_api() {
        let transport = HttpTransport::new(Duration::from_secs(5));
        assert_eq!(transport.url(), "https://api.anthropic.com/v1/messages");
    }
}
