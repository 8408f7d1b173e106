//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared
//! between the library and the `edital` command-line interface.

/// The AI provider used when the configuration does not name one.
pub const DEFAULT_AI_PROVIDER: &str = "gemini";

/// The Gemini model used when the configuration does not name one.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Base URL of the Gemini `generateContent` REST endpoint.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// The process-wide environment variable holding the Gemini credential.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Declared content type for PDF uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Declared content type for plain-text uploads.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";

/// Declared content type for the generated draft.
pub const MARKDOWN_CONTENT_TYPE: &str = "text/markdown";

/// Default stipend shown on the parameters form.
pub const DEFAULT_STIPEND: &str = "R$ 1.250,56";

/// Default transportation allowance shown on the parameters form.
pub const DEFAULT_TRANSPORT_ALLOWANCE: &str = "R$ 176,00";

/// Builds the `generateContent` URL for a Gemini model.
pub fn gemini_api_url(model_name: &str) -> String {
    format!("{GEMINI_API_BASE}/{model_name}:generateContent")
}
