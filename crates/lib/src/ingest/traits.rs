use crate::ingest::types::UploadedFile;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while extracting the text of a single uploaded file.
///
/// These never abort a batch: `extract_reference_context` records them per
/// file and moves on.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to parse PDF content: {0}")]
    Parse(String),

    #[error("File is not valid UTF-8 text: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Unsupported content type: {0}")]
    Unsupported(String),

    #[error("An unexpected internal error occurred: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Turns one uploaded file into plain text.
///
/// Every unit of text (a PDF page, a whole text file) is returned followed by
/// a newline, so the outputs of several files can be concatenated directly.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractError>;
}
