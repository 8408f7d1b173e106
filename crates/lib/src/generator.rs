//! # Edital Generator
//!
//! Composes the drafting prompt from the form parameters and reference
//! context, sends it to the configured AI provider and returns the draft.
//! Each call is independent: one prompt, one response, no retries.

use crate::{
    errors::PromptError,
    prompts::render_edital_prompt,
    providers::{ai::AiProvider, factory::create_provider},
    types::{GeneratedDocument, GenerationParameters, ProviderConfig, ReferenceContext},
};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Picks the credential to use for a session.
///
/// A non-blank interactive value wins; otherwise a non-blank configured value
/// (environment or config file) is used.
pub fn resolve_api_key(interactive: Option<&str>, configured: Option<&str>) -> Option<String> {
    interactive
        .into_iter()
        .chain(configured)
        .map(str::trim)
        .find(|key| !key.is_empty())
        .map(String::from)
}

/// Drafts internship-selection notices through an AI provider.
pub struct EditalGenerator {
    pub(crate) ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for EditalGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditalGenerator")
            .field("ai_provider", &self.ai_provider)
            .finish()
    }
}

impl EditalGenerator {
    pub fn builder() -> EditalGeneratorBuilder {
        EditalGeneratorBuilder::new()
    }

    /// Builds a generator from provider configuration.
    ///
    /// Fails with `PromptError::MissingApiKey` before any network activity
    /// when a Gemini provider has no credential.
    pub fn from_config(
        config: &ProviderConfig,
        interactive_key: Option<&str>,
    ) -> Result<Self, PromptError> {
        let ai_provider = create_provider(config, interactive_key)?;
        Self::builder().ai_provider(ai_provider).build()
    }

    /// Renders the prompt that `generate` would send.
    pub fn render_prompt(
        &self,
        params: &GenerationParameters,
        context: &ReferenceContext,
    ) -> String {
        render_edital_prompt(params, context)
    }

    /// Generates a draft. The provider's text is returned unmodified.
    #[instrument(skip_all, fields(area = %params.area, unit = %params.unit))]
    pub async fn generate(
        &self,
        params: &GenerationParameters,
        context: &ReferenceContext,
    ) -> Result<GeneratedDocument, PromptError> {
        if context.is_empty() {
            info!("No reference context; using the default edital structure.");
        }
        let prompt = self.render_prompt(params, context);
        debug!(prompt = %prompt, "--> Sending drafting prompt to AI provider");

        match self.ai_provider.generate(&prompt).await {
            Ok(body) => {
                info!("Draft generated ({} characters).", body.chars().count());
                Ok(GeneratedDocument::new(body))
            }
            Err(e) => {
                warn!(kind = ?e.kind(), "Draft generation failed: {e}");
                Err(e)
            }
        }
    }
}

/// A builder for creating `EditalGenerator` instances.
#[derive(Default)]
pub struct EditalGeneratorBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
}

impl EditalGeneratorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the AI provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Builds the `EditalGenerator`.
    pub fn build(self) -> Result<EditalGenerator, PromptError> {
        let ai_provider = self.ai_provider.ok_or_else(|| {
            PromptError::MissingAiProvider("an AI provider must be set".to_string())
        })?;
        Ok(EditalGenerator { ai_provider })
    }
}
