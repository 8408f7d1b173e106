//! # Edital Draft Generator
//!
//! This crate drafts internship-selection public notices (*editais*) with a
//! generative-text service. It extracts text from uploaded reference
//! documents, renders the form parameters and that context into a single
//! prompt, and returns the Markdown draft produced by the configured AI
//! provider.

pub mod constants;
pub mod errors;
pub mod generator;
pub mod ingest;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::{ErrorKind, PromptError};
pub use generator::{resolve_api_key, EditalGenerator, EditalGeneratorBuilder};
pub use ingest::{extract_reference_context, ExtractionReport, UploadedFile};
pub use types::{
    DocumentArtifact, GeneratedDocument, GenerationParameters, ProviderConfig, ReferenceContext,
    TrainingArea, WeeklyHours,
};
