//! Offline stub transport.
//!
//! Pattern-matches the outgoing prompt text against the three known request
//! shapes and synthesizes a canned structured response with the live wire
//! shape `{"content":[{"text": ...}]}`. Exists purely so the rest of the
//! system can be exercised without network access; the dispatcher's retry
//! algorithm is untouched by it.

use serde_json::{Value, json};

use microlearn_core::dispatch::{MessagesTransport, TransportError, TransportReply};
use microlearn_types::curriculum::{
    CurriculumOutline, Infographic, Interaction, InteractionKind, OutlineSection, Screen,
    ScreenKind,
};
use microlearn_types::dispatch::HeaderSet;
use microlearn_types::node::Category;

/// Network-free transport synthesizing canned replies.
#[derive(Default)]
pub struct StubTransport;

impl StubTransport {
    pub fn new() -> Self {
        Self
    }
}

impl MessagesTransport for StubTransport {
    async fn send(
        &self,
        body: &Value,
        _headers: &HeaderSet,
    ) -> Result<TransportReply, TransportError> {
        // Task phrases can live in either the system preamble or the first
        // user message, so match against both.
        let system = body["system"].as_str().unwrap_or("");
        let prompt = body["messages"][0]["content"].as_str().unwrap_or("");
        let text = synthesize(&format!("{system}\n{prompt}"));
        Ok(TransportReply {
            status: 200,
            body: json!({ "content": [{ "text": text }] }).to_string(),
        })
    }
}

/// Infer intent from the prompt and produce the generated-answer text.
fn synthesize(prompt: &str) -> String {
    let lowered = prompt.to_lowercase();

    if lowered.contains("microlearning curriculum") {
        return serde_json::to_string(&canned_outline()).unwrap_or_default();
    }

    if lowered.contains("microlearning screens") {
        return json!({ "screens": canned_screens() }).to_string();
    }

    if lowered.contains("categorize this learning screen") {
        return pick_category(&lowered).to_string();
    }

    json!({ "message": "stub response" }).to_string()
}

fn canned_outline() -> CurriculumOutline {
    CurriculumOutline {
        title: "Offline Curriculum".to_string(),
        tagline: "Canned outline for network-free runs".to_string(),
        total_screens: 12,
        estimated_minutes: 30,
        sections: vec![
            OutlineSection {
                id: "s1".to_string(),
                title: "Foundations".to_string(),
                tag: "01 / FOUND".to_string(),
                screens: 4,
                theme: "Core skills".to_string(),
            },
            OutlineSection {
                id: "s2".to_string(),
                title: "Applied Techniques".to_string(),
                tag: "02 / TECH".to_string(),
                screens: 4,
                theme: "Putting it to work".to_string(),
            },
            OutlineSection {
                id: "s3".to_string(),
                title: "Synthesis".to_string(),
                tag: "03 / SYN".to_string(),
                screens: 4,
                theme: "Practice and review".to_string(),
            },
        ],
    }
}

fn canned_screens() -> Vec<Screen> {
    vec![
        Screen {
            id: "screen-1".to_string(),
            kind: ScreenKind::Concept,
            tag: "01 / CORE".to_string(),
            headline: "Identify the main idea".to_string(),
            body: "Look for the claim everything else supports.".to_string(),
            trend: Some("Used in automated study tools".to_string()),
            shortcut: Some("Claim-first".to_string()),
            interaction: Some(Interaction {
                kind: InteractionKind::TypeAnswer,
                prompt: "What is the main claim?".to_string(),
                target: Some("The main claim".to_string()),
                hint: Some("therefore".to_string()),
            }),
            infographic: Some(Infographic::Steps(json!({}))),
        },
        Screen {
            id: "screen-2".to_string(),
            kind: ScreenKind::Interaction,
            tag: "01 / CORE".to_string(),
            headline: "Find the assumption".to_string(),
            body: "Spot the gap between evidence and conclusion.".to_string(),
            trend: Some("Common in modern assessments".to_string()),
            shortcut: Some("Gap-spot".to_string()),
            interaction: Some(Interaction {
                kind: InteractionKind::Multiple,
                prompt: "Which option is an assumption?".to_string(),
                target: None,
                hint: Some("unsupported".to_string()),
            }),
            infographic: Some(Infographic::Comparison(json!({}))),
        },
    ]
}

/// Keyword pick from the fixed category set; Math is the fallback.
fn pick_category(lowered_prompt: &str) -> Category {
    const KEYWORDS: [(&str, Category); 5] = [
        ("code", Category::Code),
        ("data", Category::Data),
        ("history", Category::History),
        ("science", Category::Science),
        ("business", Category::Business),
    ];

    for (keyword, category) in KEYWORDS {
        if lowered_prompt.contains(keyword) {
            return category;
        }
    }
    Category::Math
}

#[cfg(test)]
mod tests {
    use super::*;
    use microlearn_core::generate::parse::{parse_generated, parse_text};
    use microlearn_core::generate::prompt::{categorize_prompt, outline_prompt, screens_prompt};
    use microlearn_core::generate::request_payload;
    use serde::Deserialize;

    async fn send_prompt_with_system(system: Option<&str>, prompt: &str) -> Value {
        let payload = request_payload(system, prompt, 64);
        let reply = StubTransport::new()
            .send(&Value::Object(payload), &HeaderSet::new())
            .await
            .unwrap();
        assert_eq!(reply.status, 200);
        serde_json::from_str(&reply.body).unwrap()
    }

    async fn send_prompt(prompt: &str) -> Value {
        send_prompt_with_system(None, prompt).await
    }

    #[tokio::test]
    async fn outline_prompt_yields_parseable_outline() {
        let body = send_prompt(&outline_prompt("Rust", None)).await;
        let outline: CurriculumOutline = parse_generated(&body).unwrap();
        assert_eq!(outline.sections.len(), 3);
        assert_eq!(outline.total_screens, 12);
    }

    #[tokio::test]
    async fn screens_prompt_yields_parseable_screens() {
        #[derive(Deserialize)]
        struct ScreensEnvelope {
            screens: Vec<Screen>,
        }

        let body = send_prompt(&screens_prompt("Rust", None, "Foundations", 0, 4)).await;
        let envelope: ScreensEnvelope = parse_generated(&body).unwrap();
        assert_eq!(envelope.screens.len(), 2);
        assert_eq!(envelope.screens[0].kind, ScreenKind::Concept);
    }

    #[tokio::test]
    async fn categorize_prompt_yields_category_from_fixed_set() {
        let body = send_prompt(&categorize_prompt(
            "Intro to statistics",
            "Mean, median, mode.",
            "Data analysis",
        ))
        .await;
        let label = parse_text(&body).unwrap();
        let category: Category = label.parse().unwrap();
        assert_eq!(category, Category::Data);
    }

    #[tokio::test]
    async fn task_phrase_in_system_preamble_still_classifies() {
        #[derive(Deserialize)]
        struct ScreensEnvelope {
            screens: Vec<Screen>,
        }

        // The user message alone carries no task phrase here.
        let body = send_prompt_with_system(
            Some("You build microlearning screens from an outline."),
            "Section: Foundations",
        )
        .await;
        let envelope: ScreensEnvelope = parse_generated(&body).unwrap();
        assert_eq!(envelope.screens.len(), 2);
    }

    #[tokio::test]
    async fn unknown_prompt_gets_generic_stub() {
        let body = send_prompt("tell me a joke").await;
        let text = parse_text(&body).unwrap();
        assert!(text.contains("stub response"));
    }

    #[test]
    fn category_keyword_fallback_is_math() {
        assert_eq!(pick_category("nothing matches here"), Category::Math);
        assert_eq!(pick_category("some python code"), Category::Code);
    }
}
