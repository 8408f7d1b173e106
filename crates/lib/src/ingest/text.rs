//! # Plain-Text Extraction

use crate::ingest::{
    traits::{ExtractError, Extractor},
    types::UploadedFile,
};
use async_trait::async_trait;

/// Extractor for every upload that is not a PDF. The bytes must be valid
/// UTF-8; the decoded text is returned followed by a newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

#[async_trait]
impl Extractor for PlainTextExtractor {
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractError> {
        let mut text = String::from_utf8(file.bytes.clone())?;
        text.push('\n');
        Ok(text)
    }
}
