//! Turning dispatcher success bodies into domain values.
//!
//! The backend answers with a content array whose first element's text field
//! holds the generated answer. Models sometimes wrap JSON in markdown fences
//! despite instructions, so fences are stripped before parsing.

use serde::de::DeserializeOwned;
use serde_json::Value;

use microlearn_types::error::GenerationError;

/// The generated answer text: `content[0].text`.
pub fn first_content_text(body: &Value) -> Option<&str> {
    body.get("content")?.get(0)?.get("text")?.as_str()
}

/// Strip markdown code fences the model was told not to emit.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Extract and deserialize the generated JSON from a success body.
pub fn parse_generated<T: DeserializeOwned>(body: &Value) -> Result<T, GenerationError> {
    let text = first_content_text(body).ok_or(GenerationError::EmptyResponse)?;
    let cleaned = strip_code_fences(text);
    serde_json::from_str(&cleaned).map_err(|e| GenerationError::Malformed(e.to_string()))
}

/// Extract the generated answer as plain trimmed text (for categorization).
pub fn parse_text(body: &Value) -> Result<String, GenerationError> {
    let text = first_content_text(body).ok_or(GenerationError::EmptyResponse)?;
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_types::curriculum::CurriculumOutline;
    use serde_json::json;

    fn wire(text: &str) -> Value {
        json!({ "content": [{ "text": text }] })
    }

    #[test]
    fn extracts_first_content_text() {
        let body = wire("hello");
        assert_eq!(first_content_text(&body), Some("hello"));
        assert_eq!(first_content_text(&json!({"content": []})), None);
        assert_eq!(first_content_text(&Value::Null), None);
    }

    #[test]
    fn parses_fenced_outline() {
        let outline_json = r#"{"title":"T","tagline":"t","totalScreens":12,"estimatedMinutes":25,"sections":[]}"#;
        let body = wire(&format!("```json\n{outline_json}\n```"));
        let outline: CurriculumOutline = parse_generated(&body).unwrap();
        assert_eq!(outline.title, "T");
        assert_eq!(outline.total_screens, 12);
    }

    #[test]
    fn empty_body_is_empty_response() {
        let err = parse_generated::<CurriculumOutline>(&json!({"raw": "oops"})).unwrap_err();
        assert!(matches!(err, GenerationError::EmptyResponse));
    }

    #[test]
    fn garbage_text_is_malformed() {
        let err = parse_generated::<CurriculumOutline>(&wire("not json")).unwrap_err();
        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[test]
    fn parse_text_trims() {
        assert_eq!(parse_text(&wire("  Science \n")).unwrap(), "Science");
    }
}
