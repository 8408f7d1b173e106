//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used by the `edital` library.

pub mod edital;

pub use edital::{render_edital_prompt, EDITAL_FALLBACK_STRUCTURE, EDITAL_PROMPT_TEMPLATE};
