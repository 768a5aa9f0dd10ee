//! Prompt construction and response parsing for the generative tasks.

pub mod parse;
pub mod prompt;

use microlearn_types::dispatch::Payload;
use serde_json::json;

/// Assemble the opaque request payload the dispatcher sends: token budget,
/// optional system preamble, and a single user message. The dispatcher adds
/// the `model` key per attempt.
pub fn request_payload(system: Option<&str>, prompt: &str, max_tokens: u32) -> Payload {
    let mut payload = Payload::new();
    payload.insert("max_tokens".to_string(), json!(max_tokens));
    if let Some(system) = system {
        payload.insert("system".to_string(), json!(system));
    }
    payload.insert(
        "messages".to_string(),
        json!([{ "role": "user", "content": prompt }]),
    );
    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_has_expected_shape() {
        let payload = request_payload(Some("Be terse"), "Say OK", 64);
        let value = serde_json::Value::Object(payload);
        assert_eq!(value["max_tokens"], 64);
        assert_eq!(value["system"], "Be terse");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "Say OK");
        assert!(value.get("model").is_none());
    }

    #[test]
    fn system_omitted_when_none() {
        let payload = request_payload(None, "Categorize this", 10);
        assert!(!payload.contains_key("system"));
    }
}
