//! Momentum configuration types and loading

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main Momentum configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation backend configuration
    pub llm: LlmConfig,

    /// Planner behavior configuration
    pub planner: PlannerConfig,

    /// Pomodoro session configuration
    pub session: SessionConfig,
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Explicit path, then `.momentum.yml` in the working directory, then
    /// `~/.config/momentum/momentum.yml`, then defaults.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let local_config = PathBuf::from(".momentum.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("momentum").join("momentum.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Generation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Provider name (currently only "gemini" supported)
    pub provider: String,

    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: "gemini-2.0-flash-exp".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_tokens: 8192,
            timeout_ms: 30_000,
        }
    }
}

/// Planner behavior configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Remote plan endpoint URL; when set, plans are acquired from it
    /// instead of calling the generator directly
    #[serde(rename = "endpoint-url")]
    pub endpoint_url: Option<String>,

    /// Always use the deterministic offline synthesizer
    pub offline: bool,
}

/// Pomodoro session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Work interval length in seconds
    #[serde(rename = "work-secs")]
    pub work_secs: u32,

    /// Break interval length in seconds
    #[serde(rename = "break-secs")]
    pub break_secs: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            work_secs: 25 * 60,
            break_secs: 5 * 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.llm.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.session.work_secs, 1500);
        assert_eq!(config.session.break_secs, 300);
        assert!(!config.planner.offline);
        assert!(config.planner.endpoint_url.is_none());
    }

    #[test]
    fn test_deserialize_config() {
        let yaml = r#"
llm:
  provider: gemini
  model: gemini-1.5-pro
  api-key-env: MY_API_KEY
  base-url: https://api.example.com
  max-tokens: 4096
  timeout-ms: 10000

planner:
  endpoint-url: https://plans.example.com/generate-plan
  offline: false

session:
  work-secs: 1200
  break-secs: 240
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.llm.model, "gemini-1.5-pro");
        assert_eq!(config.llm.api_key_env, "MY_API_KEY");
        assert_eq!(config.llm.max_tokens, 4096);
        assert_eq!(
            config.planner.endpoint_url.as_deref(),
            Some("https://plans.example.com/generate-plan")
        );
        assert_eq!(config.session.work_secs, 1200);
        assert_eq!(config.session.break_secs, 240);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml = r#"
planner:
  offline: true
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert!(config.planner.offline);
        assert_eq!(config.llm.provider, "gemini");
        assert_eq!(config.session.work_secs, 1500);
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("momentum.yml");
        fs::write(&path, "session:\n  work-secs: 600\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.session.work_secs, 600);
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let path = PathBuf::from("/nonexistent/momentum.yml");
        assert!(Config::load(Some(&path)).is_err());
    }
}
