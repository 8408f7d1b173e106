//! # CLI Configuration
//!
//! This module defines the configuration of the `edital` CLI and loads it
//! from layered sources:
//!
//! 1. Built-in defaults (Gemini, `gemini-1.5-flash`, current directory).
//! 2. An optional YAML file (`edital.yml`, or the `--config` path), with
//!    `${VAR}` references substituted from the environment.
//! 3. `EDITAL_`-prefixed environment variables, `__` separating nested keys
//!    (e.g. `EDITAL_AI__MODEL_NAME`).
//! 4. `GEMINI_API_KEY`, when no key was configured by the layers above.

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use edital::constants::{DEFAULT_AI_PROVIDER, DEFAULT_GEMINI_MODEL, GEMINI_API_KEY_ENV};
use edital::ProviderConfig;
use regex::Regex;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;
use tracing::info;

/// The configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "edital.yml";

/// A custom error type for configuration issues.
#[derive(Debug)]
pub enum ConfigError {
    /// Indicates an error from the underlying `config` crate.
    General(String),
    /// Indicates an explicitly requested configuration file was not found.
    NotFound(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::General(msg) => write!(f, "Configuration error: {msg}"),
            ConfigError::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::General(err.to_string())
    }
}

/// The root configuration structure, mapping directly to `edital.yml`.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// The AI provider used to draft documents.
    #[serde(default)]
    pub ai: ProviderConfig,
    /// Where generated drafts are written when no `--output` is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

// Helper to read a file, substitute env vars, and return its content.
// Returns Ok(None) if the file does not exist, or an error if it fails to read.
fn read_and_substitute(path: &str) -> Result<Option<String>, ConfigError> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ConfigError::General(format!("Failed to read config file '{path}': {e}")))?;

    let re = Regex::new(r"\$\{(?P<var>[A-Z0-9_]+)\}")
        .map_err(|e| ConfigError::General(e.to_string()))?;
    let expanded_content = re.replace_all(&content, |caps: &regex::Captures| {
        let var_name = &caps["var"];
        env::var(var_name).unwrap_or_default()
    });

    Ok(Some(expanded_content.to_string()))
}

/// Loads the CLI configuration.
///
/// `config_path_override` must point at an existing file; without it,
/// `edital.yml` is used when present and silently skipped otherwise.
pub fn get_config(config_path_override: Option<&str>) -> Result<AppConfig, ConfigError> {
    let mut builder = ConfigBuilder::builder()
        // Layer 1: Programmatic defaults.
        .set_default("ai.provider", DEFAULT_AI_PROVIDER)?
        .set_default("ai.model_name", DEFAULT_GEMINI_MODEL)?
        .set_default("output_dir", default_output_dir())?;

    // Layer 2: Optional YAML file.
    let config_path = config_path_override.unwrap_or(DEFAULT_CONFIG_FILE);
    match read_and_substitute(config_path)? {
        Some(content) => {
            info!("Loading configuration from '{config_path}'.");
            builder = builder.add_source(File::from_str(&content, FileFormat::Yaml));
        }
        None if config_path_override.is_some() => {
            return Err(ConfigError::NotFound(format!(
                "Config file not found at '{config_path}'."
            )));
        }
        None => {}
    }

    let settings = builder
        // Layer 3: Prefixed environment variables for nested overrides.
        .add_source(
            Environment::with_prefix("EDITAL")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let mut config: AppConfig = settings.try_deserialize()?;

    // Layer 4: the process-wide credential, loaded from `.env` at startup.
    let has_key = config
        .ai
        .api_key
        .as_deref()
        .is_some_and(|key| !key.trim().is_empty());
    if !has_key {
        config.ai.api_key = env::var(GEMINI_API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
    }

    Ok(config)
}
