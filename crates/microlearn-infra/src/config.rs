//! Configuration for Microlearn.
//!
//! Environment supplies the secrets and mode switches; an optional
//! `{data_dir}/config.toml` tunes dispatch behavior (preferred model,
//! candidate list, timeouts). Missing or malformed config falls back to
//! defaults with a warning.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and only exposed
//! when constructing request headers.

use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use microlearn_types::dispatch::HeaderSet;

/// The upstream API version header value.
pub const API_VERSION: &str = "2023-06-01";

/// Runtime configuration resolved from the environment.
pub struct Config {
    /// Upstream API key; absent means live requests cannot be made.
    pub api_key: Option<SecretString>,
    /// Offline stub mode: synthesize responses, never touch the network.
    pub stub_mode: bool,
    /// Directory holding the SQLite database and optional config.toml.
    pub data_dir: PathBuf,
    /// Dispatch tuning from config.toml.
    pub dispatch: DispatchSettings,
}

/// Dispatch tuning knobs, loadable from `config.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchSettings {
    /// Model to try first; `None` lets the handlers use their default.
    pub preferred_model: Option<String>,
    /// Explicit candidate list; empty means the built-in defaults.
    pub candidates: Vec<String>,
    /// Per-attempt HTTP timeout in milliseconds.
    pub attempt_timeout_ms: u64,
    /// Overall deadline across the candidate loop in milliseconds.
    pub overall_deadline_ms: u64,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            preferred_model: None,
            candidates: Vec::new(),
            attempt_timeout_ms: 30_000,
            overall_deadline_ms: 120_000,
        }
    }
}

impl DispatchSettings {
    pub fn attempt_timeout(&self) -> Duration {
        Duration::from_millis(self.attempt_timeout_ms)
    }

    pub fn overall_deadline(&self) -> Duration {
        Duration::from_millis(self.overall_deadline_ms)
    }
}

impl Config {
    /// Resolve configuration from the environment, then layer in
    /// `{data_dir}/config.toml` if present.
    pub fn from_env() -> Self {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .map(SecretString::from);
        let stub_mode = env_flag("MICROLEARN_STUB");
        let data_dir = resolve_data_dir();
        let dispatch = apply_model_override(
            load_dispatch_settings(&data_dir),
            std::env::var("MICROLEARN_MODEL").ok(),
        );

        Self {
            api_key,
            stub_mode,
            data_dir,
            dispatch,
        }
    }

    /// Headers for one backend request.
    ///
    /// In stub mode no authentication is needed and an empty set is
    /// returned. In live mode, `None` means the API key is not configured.
    pub fn request_headers(&self) -> Option<HeaderSet> {
        if self.stub_mode {
            return Some(HeaderSet::new());
        }
        let api_key = self.api_key.as_ref()?;
        let mut headers = HeaderSet::new();
        headers.insert("x-api-key".to_string(), api_key.expose_secret().to_string());
        headers.insert("anthropic-version".to_string(), API_VERSION.to_string());
        headers.insert("content-type".to_string(), "application/json".to_string());
        Some(headers)
    }

    /// Database URL for the knowledge-node store.
    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}?mode=rwc",
            self.data_dir.join("microlearn.db").display()
        )
    }
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        Err(_) => false,
    }
}

/// Data directory: `MICROLEARN_DATA_DIR`, falling back to `~/.microlearn`.
pub fn resolve_data_dir() -> PathBuf {
    match std::env::var("MICROLEARN_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".microlearn")
        }
    }
}

/// `MICROLEARN_MODEL` overrides the config.toml preferred model.
fn apply_model_override(
    mut settings: DispatchSettings,
    model: Option<String>,
) -> DispatchSettings {
    if let Some(model) = model.filter(|m| !m.is_empty()) {
        settings.preferred_model = Some(model);
    }
    settings
}

/// Load dispatch settings from `{data_dir}/config.toml`.
///
/// Missing file is the normal case and returns defaults silently; a file
/// that fails to parse logs a warning and returns defaults.
fn load_dispatch_settings(data_dir: &Path) -> DispatchSettings {
    let config_path = data_dir.join("config.toml");

    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config.toml at {}, using defaults", config_path.display());
            return DispatchSettings::default();
        }
        Err(err) => {
            tracing::warn!(
                "failed to read {}: {err}, using defaults",
                config_path.display()
            );
            return DispatchSettings::default();
        }
    };

    match toml::from_str::<DispatchSettings>(&content) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(
                "failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            DispatchSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_have_sane_timeouts() {
        let settings = DispatchSettings::default();
        assert_eq!(settings.attempt_timeout(), Duration::from_secs(30));
        assert_eq!(settings.overall_deadline(), Duration::from_secs(120));
        assert!(settings.candidates.is_empty());
    }

    #[test]
    fn settings_parse_from_toml() {
        let settings: DispatchSettings = toml::from_str(
            r#"
preferred_model = "claude-3-opus-20240229"
candidates = ["m1", "m2"]
attempt_timeout_ms = 5000
"#,
        )
        .unwrap();
        assert_eq!(settings.preferred_model.as_deref(), Some("claude-3-opus-20240229"));
        assert_eq!(settings.candidates, vec!["m1", "m2"]);
        assert_eq!(settings.attempt_timeout_ms, 5000);
        // Unset fields keep defaults.
        assert_eq!(settings.overall_deadline_ms, 120_000);
    }

    #[test]
    fn env_model_overrides_config_file_model() {
        let mut settings = DispatchSettings::default();
        settings.preferred_model = Some("from-config-toml".to_string());

        let settings = apply_model_override(settings, Some("from-env".to_string()));
        assert_eq!(settings.preferred_model.as_deref(), Some("from-env"));
    }

    #[test]
    fn absent_or_empty_env_model_keeps_config_file_model() {
        let mut settings = DispatchSettings::default();
        settings.preferred_model = Some("from-config-toml".to_string());

        let settings = apply_model_override(settings, None);
        assert_eq!(settings.preferred_model.as_deref(), Some("from-config-toml"));

        let settings = apply_model_override(settings, Some(String::new()));
        assert_eq!(settings.preferred_model.as_deref(), Some("from-config-toml"));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = load_dispatch_settings(tmp.path());
        assert!(settings.preferred_model.is_none());
    }

    #[test]
    fn stub_mode_headers_are_empty_but_present() {
        let config = Config {
            api_key: None,
            stub_mode: true,
            data_dir: PathBuf::from("."),
            dispatch: DispatchSettings::default(),
        };
        assert_eq!(config.request_headers(), Some(HeaderSet::new()));
    }

    #[test]
    fn live_mode_without_key_has_no_headers() {
        let config = Config {
            api_key: None,
            stub_mode: false,
            data_dir: PathBuf::from("."),
            dispatch: DispatchSettings::default(),
        };
        assert!(config.request_headers().is_none());
    }

    #[test]
    fn live_mode_headers_carry_auth_and_version() {
        let config = Config {
            api_key: Some(SecretString::from("test-key-not-real")),
            stub_mode: false,
            data_dir: PathBuf::from("."),
            dispatch: DispatchSettings::default(),
        };
        let headers = config.request_headers().unwrap();
        assert_eq!(headers.get("x-api-key").map(String::as_str), Some("test-key-not-real"));
        assert_eq!(headers.get("anthropic-version").map(String::as_str), Some(API_VERSION));
        assert_eq!(
            headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }
}
