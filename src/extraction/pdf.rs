use lopdf::Document;
use tracing::debug;

use super::ExtractionError;

/// Extract the text of every page in page order.
///
/// Page texts are concatenated as the library returns them, with no separator
/// added and no per-page trimming; only the final string is trimmed.
pub fn extract_text_from_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut document = Document::load_mem(bytes)?;

    // Permissions-only PDFs open with the empty user password
    if document.is_encrypted() {
        document.decrypt("").map_err(|e| {
            debug!(error = %e, "PDF needs a user password");
            ExtractionError::Encrypted
        })?;
    }

    let pages = document.get_pages();
    debug!(page_count = pages.len(), "Loaded PDF document");

    let mut text = String::new();
    for page_number in pages.keys() {
        text.push_str(&document.extract_text(&[*page_number])?);
    }

    Ok(text.trim().to_string())
}
