//! `POST /extract-text`
//!
//! Validate -> Extract -> Respond. The declared content type of the `file`
//! field is checked before its bytes are read; anything outside the
//! allow-list ends the request with a 400 and no extraction is attempted.

use axum::{
    extract::multipart::{Multipart, MultipartRejection},
    routing::post,
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::extraction::DocumentProcessor;
use crate::models::{ExtractionResult, UploadedDocument};
use crate::types::{AppError, AppResult, DocumentKind};

const FILE_FIELD: &str = "file";

pub fn router() -> Router {
    Router::new().route("/extract-text", post(extract_document_text))
}

#[instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
async fn extract_document_text(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ExtractionResult>> {
    let mut multipart = multipart?;
    let document = read_upload(&mut multipart).await?;

    info!(
        filename = %document.filename,
        kind = %document.kind,
        bytes = document.payload.len(),
        "Extracting uploaded document"
    );

    let result = DocumentProcessor::process_document(document).await?;

    info!(chars = result.extracted_text.len(), "Extraction complete");

    Ok(Json(result))
}

/// Find the `file` field, validate its content type, then buffer its bytes.
async fn read_upload(multipart: &mut Multipart) -> AppResult<UploadedDocument> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let Some(kind) = DocumentKind::from_content_type(&content_type) else {
            return Err(AppError::UnsupportedFormat { content_type });
        };
        let filename = field.file_name().unwrap_or_default().to_string();
        let payload = field.bytes().await?;

        return Ok(UploadedDocument {
            filename,
            content_type,
            kind,
            payload,
        });
    }

    Err(AppError::MissingField(FILE_FIELD))
}
