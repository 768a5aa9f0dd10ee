//! Prompt text for the three generative tasks.
//!
//! The exact wording carries no contract, but the stub transport matches on
//! the task phrases ("microlearning curriculum", "microlearning screens",
//! "Categorize this learning screen"), so keep those stable.

use microlearn_types::node::Category;

/// System preamble for curriculum outline generation.
pub const OUTLINE_SYSTEM: &str = "You are a learning experience designer creating microlearning curricula.\n\
Generate ONLY valid JSON, no markdown, no backticks, no extra text.\n\
Voice: intelligent, direct, no corporate speak, treats adult learners like adults.\n\
Each section should flow logically, building from foundations to applications to synthesis.";

/// System preamble for screen batch generation.
pub const SCREENS_SYSTEM: &str = "You are a learning content creator building microlearning screens.\n\
Generate ONLY valid JSON, no markdown, no backticks, no extra text.\n\
Each screen teaches ONE concept. Punchy, direct, no fluff.\n\
Include a \"trend\" field with a current application.\n\
Include a \"shortcut\" field with the mental model or memory device.";

/// Prompt for a curriculum outline on `topic`, optionally through `lens`.
pub fn outline_prompt(topic: &str, lens: Option<&str>) -> String {
    let lens = lens.unwrap_or("None - teach generally");
    format!(
        r#"You are an expert curriculum designer. Create a microlearning curriculum for:
Topic: {topic}
Optional Lens: {lens}

Generate ONLY valid JSON with NO markdown formatting, NO backticks, NO extra text:
{{
  "title": "Punchy title (max 5 words)",
  "tagline": "One sentence description",
  "totalScreens": 12,
  "estimatedMinutes": 25,
  "sections": [
    {{
      "id": "s1",
      "title": "Section title",
      "tag": "01 / LABEL",
      "screens": 4,
      "theme": "What this section teaches"
    }}
  ]
}}

Rules:
- Include 3-4 sections
- Each section 3-5 screens
- Start with foundations, progress to applications
- If lens provided, weave it throughout as context
- Make it punchy and relevant"#
    )
}

/// Prompt for a batch of `count` screens starting at `start_idx` (0-based).
pub fn screens_prompt(
    topic: &str,
    lens: Option<&str>,
    section_title: &str,
    start_idx: u32,
    count: u32,
) -> String {
    let lens = lens.unwrap_or("General");
    let first = start_idx + 1;
    let last = start_idx + count;
    format!(
        r#"Generate {count} microlearning screens.
Topic: {topic}
Lens: {lens}
Section: {section_title}
Screen numbers: {first} to {last}

Return ONLY this JSON:
{{
  "screens": [
    {{
      "id": "screen-{first}",
      "type": "concept|interaction|shortcut|visualization",
      "tag": "01 / TOPIC",
      "headline": "Max 8 words punchy direct",
      "body": "2-3 sentences, direct voice",
      "trend": "How this applies today",
      "shortcut": "Mental model or memory device",
      "interaction": {{
        "type": "type-answer|reveal|multiple",
        "prompt": "What should user do",
        "target": "correct answer or null",
        "hint": "Single word hint"
      }},
      "infographic": {{
        "type": "flow|comparison|formula|steps",
        "data": {{}}
      }}
    }}
  ]
}}

Rules:
- ONE concept per screen
- Interaction required before proceeding
- Include a current trend for each
- Include a mental shortcut for each
- Direct voice throughout"#
    )
}

/// Prompt asking for exactly one category name from the fixed set.
pub fn categorize_prompt(headline: &str, body: &str, topic: &str) -> String {
    let categories = Category::ANSWERABLE
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Categorize this learning screen into ONE category: {categories}\n\
Headline: {headline}\n\
Body: {body}\n\
Topic: {topic}\n\n\
Respond with ONLY the category name, nothing else."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_prompt_names_topic_and_lens() {
        let prompt = outline_prompt("Rust ownership", Some("systems programming"));
        assert!(prompt.contains("microlearning curriculum"));
        assert!(prompt.contains("Topic: Rust ownership"));
        assert!(prompt.contains("systems programming"));
    }

    #[test]
    fn screens_prompt_numbers_are_one_indexed() {
        let prompt = screens_prompt("Rust", None, "Foundations", 4, 4);
        assert!(prompt.contains("Screen numbers: 5 to 8"));
        assert!(prompt.contains("screen-5"));
        assert!(prompt.contains("Lens: General"));
        assert!(prompt.contains("microlearning screens"));
    }

    #[test]
    fn categorize_prompt_lists_all_answerable_categories() {
        let prompt = categorize_prompt("Borrow checker", "Rules of references.", "Rust");
        assert!(prompt.starts_with("Categorize this learning screen"));
        assert!(prompt.contains("Math, Data, Code, History, Science, Business"));
        assert!(!prompt.contains("Default"));
    }
}
