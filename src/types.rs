// Type definitions and enums

use axum::{
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::extraction::ExtractionError;
use crate::models::ErrorResponse;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Document formats the service knows how to extract text from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Validate a client-declared content type against the allow-list.
    ///
    /// Matching is exact: parameters, casing differences or other
    /// `...document` types are all rejected.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        if content_type == mime::APPLICATION_PDF.essence_str() {
            Some(DocumentKind::Pdf)
        } else if content_type == DOCX_MIME {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => mime::APPLICATION_PDF.essence_str(),
            DocumentKind::Docx => DOCX_MIME,
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "pdf"),
            DocumentKind::Docx => write!(f, "docx"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Only PDF and DOCX files are supported.")]
    UnsupportedFormat { content_type: String },

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Missing required form field: {0}")]
    MissingField(&'static str),

    #[error("Invalid multipart upload: {0}")]
    InvalidUpload(#[from] MultipartError),

    #[error("Invalid multipart upload: {0}")]
    InvalidRequest(#[from] MultipartRejection),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnsupportedFormat { .. } => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingField(_) => StatusCode::UNPROCESSABLE_ENTITY,
            // Carries 413 when the configured body limit is exceeded
            AppError::InvalidUpload(e) => e.status(),
            AppError::InvalidRequest(e) => e.status(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::UnsupportedFormat { content_type } => {
                warn!(content_type = %content_type, "Rejected unsupported content type");
            }
            AppError::Extraction(e) => {
                error!(error = ?e, "Document extraction failed");
            }
            other => {
                warn!(status = %status, "Rejected upload: {}", other);
            }
        }

        let body = ErrorResponse {
            detail: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
