use bytes::Bytes;

use crate::config::Config;
use crate::types::DocumentKind;

/// Composition root handed to `create_router`; built once in `main`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// A validated file upload, held in memory for the duration of one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub content_type: String,
    pub kind: DocumentKind,
    pub payload: Bytes,
}

// API Request/Response types

/// Response body of `POST /extract-text`
#[derive(Debug, Clone, serde::Serialize)]
pub struct ExtractionResult {
    pub filename: String,
    pub content_type: String,
    pub extracted_text: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}
