//! # Reference Document Extraction
//!
//! This module turns uploaded reference documents (PDF or plain text) into
//! the `ReferenceContext` that grounds a generation request. Extraction is a
//! single pass in upload order; a file that fails is reported and skipped,
//! never fatal to the batch.

#[cfg(feature = "pdf")]
pub mod pdf;
pub mod text;
pub mod traits;
pub mod types;

pub use text::PlainTextExtractor;
pub use traits::{ExtractError, Extractor};
pub use types::{content_type_for_path, ExtractionFailure, ExtractionReport, UploadedFile};

#[cfg(feature = "pdf")]
pub use self::pdf::PdfExtractor;

use tracing::{info, instrument, warn};

/// Extracts the text of a single upload, dispatching on its declared
/// content type.
pub async fn extract_file(file: &UploadedFile) -> Result<String, ExtractError> {
    if file.is_pdf() {
        extract_pdf(file).await
    } else {
        PlainTextExtractor.extract(file).await
    }
}

#[cfg(feature = "pdf")]
async fn extract_pdf(file: &UploadedFile) -> Result<String, ExtractError> {
    PdfExtractor.extract(file).await
}

#[cfg(not(feature = "pdf"))]
async fn extract_pdf(file: &UploadedFile) -> Result<String, ExtractError> {
    Err(ExtractError::Unsupported(format!(
        "{} (PDF support is disabled)",
        file.content_type
    )))
}

/// Extracts every upload into one `ReferenceContext`, in upload order.
///
/// Failures are collected in the report, one entry per file, and the
/// remaining files are still processed. A failed file contributes no text.
#[instrument(skip_all, fields(files = files.len()))]
pub async fn extract_reference_context(files: &[UploadedFile]) -> ExtractionReport {
    let mut report = ExtractionReport::default();

    for file in files {
        match extract_file(file).await {
            Ok(text) => report.context.push(file.name.clone(), text),
            Err(e) => {
                warn!("Failed to extract text from '{}': {}", file.name, e);
                report.failures.push(ExtractionFailure {
                    file_name: file.name.clone(),
                    message: e.to_string(),
                });
            }
        }
    }

    info!(
        loaded = report.loaded(),
        failed = report.failures.len(),
        chars = report.context.char_count(),
        "Reference extraction finished."
    );
    report
}
