//! # Extraction Types
//!
//! Inputs and outputs of the reference-document extractor.

use crate::constants::{PDF_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use crate::types::ReferenceContext;
use std::fmt;
use std::path::Path;

/// An uploaded reference document: a name, a declared content type and the
/// raw bytes.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl UploadedFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, declaring its content type from the extension.
    pub async fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self {
            name,
            content_type: content_type_for_path(path).to_string(),
            bytes,
        })
    }

    pub fn is_pdf(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(PDF_CONTENT_TYPE)
    }
}

/// Maps a file extension to the content type an upload widget would declare.
pub fn content_type_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => PDF_CONTENT_TYPE,
        "txt" | "md" => TEXT_CONTENT_TYPE,
        _ => "application/octet-stream",
    }
}

/// A file whose text could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub file_name: String,
    pub message: String,
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error reading file {}: {}", self.file_name, self.message)
    }
}

/// The outcome of extracting a batch of uploads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    pub context: ReferenceContext,
    pub failures: Vec<ExtractionFailure>,
}

impl ExtractionReport {
    /// Number of files whose text made it into the context.
    pub fn loaded(&self) -> usize {
        self.context.documents.len()
    }
}
