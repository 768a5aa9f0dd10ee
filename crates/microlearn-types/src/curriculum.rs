//! Curriculum and learning-screen types.
//!
//! These mirror the JSON the generative backend is asked to produce:
//! camelCase field names, a tagged `infographic` union, and an optional
//! per-screen interaction. Fields the model sometimes omits are `Option`
//! so a slightly sloppy generation still deserializes.

use serde::{Deserialize, Serialize};

/// A generated curriculum outline for one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumOutline {
    pub title: String,
    pub tagline: String,
    pub total_screens: u32,
    pub estimated_minutes: u32,
    pub sections: Vec<OutlineSection>,
}

/// One section of a curriculum outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutlineSection {
    pub id: String,
    pub title: String,
    pub tag: String,
    pub screens: u32,
    pub theme: String,
}

/// A single bite-sized learning screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ScreenKind,
    pub tag: String,
    pub headline: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interaction: Option<Interaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infographic: Option<Infographic>,
}

/// What a screen primarily does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenKind {
    Concept,
    Interaction,
    Shortcut,
    Visualization,
}

/// The interactive element a screen requires before the user may advance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub prompt: String,
    /// Correct answer; `None` for interactions with no single right answer.
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

/// How the user answers an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionKind {
    TypeAnswer,
    Reveal,
    Multiple,
}

/// Visual diagram attached to a screen, dispatched on its type tag.
///
/// Serializes as `{"type": "flow", "data": {...}}`. The `data` payload is
/// free-form -- its shape is owned by the rendering layer, not by us.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Infographic {
    Flow(serde_json::Value),
    Comparison(serde_json::Value),
    Steps(serde_json::Value),
    Formula(serde_json::Value),
}

impl Infographic {
    /// Returns the type tag string for this infographic.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Infographic::Flow(_) => "flow",
            Infographic::Comparison(_) => "comparison",
            Infographic::Steps(_) => "steps",
            Infographic::Formula(_) => "formula",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_deserializes_camel_case() {
        let json = r#"{
            "title": "LSAT Mastery",
            "tagline": "High-yield strategies",
            "totalScreens": 12,
            "estimatedMinutes": 30,
            "sections": [
                {"id": "s1", "title": "Foundations", "tag": "01 / FOUND", "screens": 4, "theme": "Core logic"}
            ]
        }"#;
        let outline: CurriculumOutline = serde_json::from_str(json).unwrap();
        assert_eq!(outline.total_screens, 12);
        assert_eq!(outline.sections.len(), 1);
        assert_eq!(outline.sections[0].tag, "01 / FOUND");
    }

    #[test]
    fn screen_deserializes_with_interaction_and_infographic() {
        let json = r#"{
            "id": "screen-1",
            "type": "concept",
            "tag": "01 / LOGIC",
            "headline": "Identify the conclusion",
            "body": "Look for indicator words.",
            "trend": "AI-assisted item analysis",
            "shortcut": "Conclusion-first",
            "interaction": {
                "type": "type-answer",
                "prompt": "What is the main claim?",
                "target": "The main claim",
                "hint": "Look for therefore"
            },
            "infographic": {"type": "steps", "data": {}}
        }"#;
        let screen: Screen = serde_json::from_str(json).unwrap();
        assert_eq!(screen.kind, ScreenKind::Concept);
        let interaction = screen.interaction.unwrap();
        assert_eq!(interaction.kind, InteractionKind::TypeAnswer);
        assert_eq!(interaction.target.as_deref(), Some("The main claim"));
        assert_eq!(screen.infographic.unwrap().kind_name(), "steps");
    }

    #[test]
    fn screen_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": "screen-2",
            "type": "interaction",
            "tag": "02 / TECH",
            "headline": "Find the assumption",
            "body": "Spot the gap."
        }"#;
        let screen: Screen = serde_json::from_str(json).unwrap();
        assert!(screen.trend.is_none());
        assert!(screen.interaction.is_none());
        assert!(screen.infographic.is_none());
    }

    #[test]
    fn interaction_null_target_deserializes() {
        let json = r#"{"type": "multiple", "prompt": "Pick one", "target": null, "hint": "Unsupported"}"#;
        let interaction: Interaction = serde_json::from_str(json).unwrap();
        assert_eq!(interaction.kind, InteractionKind::Multiple);
        assert!(interaction.target.is_none());
    }

    #[test]
    fn infographic_round_trips_tag_and_data() {
        let ig = Infographic::Comparison(serde_json::json!({"left": "a", "right": "b"}));
        let json = serde_json::to_value(&ig).unwrap();
        assert_eq!(json["type"], "comparison");
        assert_eq!(json["data"]["left"], "a");

        let back: Infographic = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind_name(), "comparison");
    }
}
