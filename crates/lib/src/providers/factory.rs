//! # AI Provider Factory
//!
//! This module centralizes the logic for creating AI provider instances from
//! a `ProviderConfig`. Any consumer (the CLI, tests) goes through the same
//! credential resolution, so the precedence rule lives in one place.

use crate::{
    constants::gemini_api_url,
    errors::PromptError,
    generator::resolve_api_key,
    providers::ai::{gemini::GeminiProvider, local::LocalAiProvider, AiProvider},
    types::ProviderConfig,
};
use tracing::info;

/// Creates the AI provider described by `config`.
///
/// `interactive_key` is a credential typed by the user for this session. When
/// non-blank it wins over `config.api_key`.
///
/// - `gemini`: a credential is mandatory. The URL defaults to the public
///   `generateContent` endpoint for `config.model_name`.
/// - `local`: an OpenAI-compatible endpoint; `api_url` is mandatory and the
///   credential optional.
pub fn create_provider(
    config: &ProviderConfig,
    interactive_key: Option<&str>,
) -> Result<Box<dyn AiProvider>, PromptError> {
    let api_key = resolve_api_key(interactive_key, config.api_key.as_deref());

    let provider: Box<dyn AiProvider> = match config.provider.as_str() {
        "gemini" => {
            let api_key = api_key.ok_or(PromptError::MissingApiKey)?;
            let api_url = config
                .api_url
                .clone()
                .unwrap_or_else(|| gemini_api_url(&config.model_name));
            info!("Configuring Gemini provider with URL: {}", api_url);
            Box::new(GeminiProvider::new(api_url, api_key)?)
        }
        "local" => {
            let api_url = config.api_url.clone().ok_or_else(|| {
                PromptError::MissingAiProvider(
                    "api_url must be set to use the local provider".to_string(),
                )
            })?;
            info!("Configuring local AI provider with URL: {}", api_url);
            Box::new(LocalAiProvider::new(
                api_url,
                api_key,
                Some(config.model_name.clone()),
            )?)
        }
        other => return Err(PromptError::UnsupportedProvider(other.to_string())),
    };

    Ok(provider)
}
