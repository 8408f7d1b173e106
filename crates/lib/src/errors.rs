use thiserror::Error;

/// Custom error types for the generation pipeline.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("API key is missing. Provide it with --api-key or set GEMINI_API_KEY.")]
    MissingApiKey,
    #[error("No AI provider configured: {0}")]
    MissingAiProvider(String),
    #[error("Unsupported AI provider: {0}")]
    UnsupportedProvider(String),
    #[error("Failed to build Reqwest client: {0}")]
    ReqwestClientBuild(reqwest::Error),
    #[error("Failed to send request to AI provider: {0}")]
    AiRequest(reqwest::Error),
    #[error("Failed to deserialize AI provider response: {0}")]
    AiDeserialization(reqwest::Error),
    #[error("AI provider returned an error (status {status}): {message}")]
    AiApi { status: u16, message: String },
    #[error("AI provider returned no text")]
    EmptyResponse,
}

/// Broad classification of a `PromptError`, so callers can branch on the
/// failure without inspecting the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The client could not be set up (missing credential, bad provider).
    Configuration,
    /// The request never produced an HTTP response.
    Transport,
    /// The service answered, but with an error or an unusable body.
    Upstream,
}

impl PromptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PromptError::MissingApiKey
            | PromptError::MissingAiProvider(_)
            | PromptError::UnsupportedProvider(_)
            | PromptError::ReqwestClientBuild(_) => ErrorKind::Configuration,
            PromptError::AiRequest(_) => ErrorKind::Transport,
            PromptError::AiDeserialization(_)
            | PromptError::AiApi { .. }
            | PromptError::EmptyResponse => ErrorKind::Upstream,
        }
    }
}
