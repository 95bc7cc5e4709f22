use std::io::Cursor;

use docx_rust::document::{BodyContent, Paragraph};
use docx_rust::DocxFile;
use tracing::debug;

use super::ExtractionError;

/// Extract top-level body paragraphs, newline-joined in document order.
///
/// Paragraphs whose text is empty after trimming are skipped. Tables and other
/// non-paragraph body content are not read.
pub fn extract_text_from_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let file = DocxFile::from_reader(Cursor::new(bytes))?;
    let docx = file.parse()?;

    let paragraphs: Vec<String> = docx
        .document
        .body
        .content
        .iter()
        .filter_map(|content| match content {
            BodyContent::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
            _ => None,
        })
        .filter(|text| !text.trim().is_empty())
        .collect();

    debug!(paragraph_count = paragraphs.len(), "Parsed DOCX document");

    Ok(paragraphs.join("\n").trim().to_string())
}

// Concatenated text of all runs in the paragraph
fn paragraph_text(paragraph: &Paragraph<'_>) -> String {
    let mut text = String::new();
    for run_text in paragraph.iter_text() {
        text.push_str(run_text);
    }
    text
}
