//! # PDF Text Extraction
//!
//! Extracts the text of every page, in page order. Strings are decoded
//! through each font's encoding and ToUnicode map, so composite (Type0)
//! fonts yield readable text. Parsing is CPU-bound and runs on the blocking
//! pool.

use crate::ingest::{
    traits::{ExtractError, Extractor},
    types::UploadedFile,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Extractor for `application/pdf` uploads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

#[async_trait]
impl Extractor for PdfExtractor {
    #[instrument(skip_all, fields(file = %file.name))]
    async fn extract(&self, file: &UploadedFile) -> Result<String, ExtractError> {
        let data = file.bytes.clone();
        // A panic inside the parser surfaces as a join error for this file only.
        let text = tokio::task::spawn_blocking(move || extract_text_from_pdf(&data))
            .await
            .map_err(|e| {
                ExtractError::Internal(anyhow::anyhow!("Tokio join error during PDF parsing: {e}"))
            })??;

        info!(
            "Extracted {} characters from PDF '{}'.",
            text.chars().count(),
            file.name
        );
        Ok(text)
    }
}

/// Extracts text from all pages of a PDF synchronously.
///
/// Each page's text is trimmed of surrounding whitespace and followed by a
/// single newline, including pages with no text at all.
pub fn extract_text_from_pdf(pdf_data: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_data)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut full_text = String::new();
    for (page_num, page) in pages.iter().enumerate() {
        let page = page.trim();
        if page.is_empty() {
            debug!("Page {} has no extractable text.", page_num);
        }
        full_text.push_str(page);
        full_text.push('\n');
    }

    Ok(full_text)
}
