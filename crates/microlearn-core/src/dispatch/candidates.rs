//! Candidate list construction.
//!
//! The attempt order is: preferred model (if any), then the explicit list
//! (or the built-in defaults when none is given), deduplicated with
//! insertion order preserved.

/// Model the route handlers prefer when none is configured.
pub const DEFAULT_PREFERRED_MODEL: &str = "claude-3-opus-20240229";

/// Built-in ordered fallback list, newest-generation aliases first.
pub const DEFAULT_CANDIDATES: [&str; 8] = [
    "claude-3-5-sonnet-20241022",
    "claude-3-5-sonnet",
    "claude-3-5-haiku-20241022",
    "claude-3-5-haiku",
    "claude-3-opus-20240229",
    "claude-3-opus",
    "claude-3-sonnet-20240229",
    "claude-3-sonnet",
];

/// Build the ordered, deduplicated candidate sequence.
///
/// An empty `explicit` list means "use the defaults". The lists involved
/// are short, so a linear dedup scan is fine.
pub fn build_candidates(preferred: Option<&str>, explicit: &[String]) -> Vec<String> {
    let mut models: Vec<String> = Vec::new();

    if let Some(model) = preferred {
        models.push(model.to_string());
    }

    if explicit.is_empty() {
        for model in DEFAULT_CANDIDATES {
            if !models.iter().any(|m| m == model) {
                models.push(model.to_string());
            }
        }
    } else {
        for model in explicit {
            if !models.contains(model) {
                models.push(model.clone());
            }
        }
    }

    models
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_used_when_no_explicit_list() {
        let models = build_candidates(None, &[]);
        assert_eq!(models.len(), DEFAULT_CANDIDATES.len());
        assert_eq!(models[0], "claude-3-5-sonnet-20241022");
    }

    #[test]
    fn preferred_goes_first() {
        let models = build_candidates(Some("my-model"), &[]);
        assert_eq!(models[0], "my-model");
        assert_eq!(models.len(), DEFAULT_CANDIDATES.len() + 1);
    }

    #[test]
    fn preferred_already_in_defaults_appears_once_first() {
        let models = build_candidates(Some("claude-3-opus-20240229"), &[]);
        assert_eq!(models[0], "claude-3-opus-20240229");
        assert_eq!(
            models
                .iter()
                .filter(|m| *m == "claude-3-opus-20240229")
                .count(),
            1
        );
        assert_eq!(models.len(), DEFAULT_CANDIDATES.len());
    }

    #[test]
    fn explicit_list_replaces_defaults_and_dedups() {
        let explicit = vec![
            "m1".to_string(),
            "m2".to_string(),
            "m1".to_string(),
            "m3".to_string(),
        ];
        let models = build_candidates(None, &explicit);
        assert_eq!(models, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn insertion_order_is_preserved() {
        let explicit = vec!["z".to_string(), "a".to_string(), "m".to_string()];
        let models = build_candidates(Some("k"), &explicit);
        assert_eq!(models, vec!["k", "z", "a", "m"]);
    }
}
