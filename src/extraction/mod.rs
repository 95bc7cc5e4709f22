//! Document text extraction
//!
//! Thin wrappers over the document-parsing libraries:
//! - `pdf` - page-ordered text via `lopdf`
//! - `docx` - paragraph text via `docx-rust`
//!
//! Both extractors are synchronous and CPU-bound. `DocumentProcessor`
//! dispatches on the validated `DocumentKind` and moves the work onto the
//! blocking pool for async callers.

pub mod docx;
pub mod pdf;

#[cfg(test)]
pub(crate) mod fixtures;

pub use docx::extract_text_from_docx;
pub use pdf::extract_text_from_pdf;

use tracing::debug;

use crate::models::{ExtractionResult, UploadedDocument};
use crate::types::DocumentKind;

/// Failure raised while reading a document that passed content-type validation.
///
/// Display is the underlying library's own message; the library error is kept
/// as the source.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF document is encrypted")]
    Encrypted,

    #[error("{0}")]
    Docx(#[from] docx_rust::DocxError),

    #[error("extraction worker stopped unexpectedly: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub struct DocumentProcessor;

impl DocumentProcessor {
    /// Extract plain text from `bytes`, parsed as `kind`.
    pub fn extract(kind: DocumentKind, bytes: &[u8]) -> Result<String, ExtractionError> {
        match kind {
            DocumentKind::Pdf => extract_text_from_pdf(bytes),
            DocumentKind::Docx => extract_text_from_docx(bytes),
        }
    }

    /// Run extraction for an uploaded document off the async workers and
    /// build the response value.
    pub async fn process_document(
        document: UploadedDocument,
    ) -> Result<ExtractionResult, ExtractionError> {
        let UploadedDocument {
            filename,
            content_type,
            kind,
            payload,
        } = document;

        debug!(kind = %kind, bytes = payload.len(), "Starting extraction");

        let extracted_text =
            tokio::task::spawn_blocking(move || Self::extract(kind, &payload)).await??;

        Ok(ExtractionResult {
            filename,
            content_type,
            extracted_text,
        })
    }
}
