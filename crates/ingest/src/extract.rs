use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    PdfError(String),
    #[error("document contains no extractable text (scanned/image PDFs are not supported)")]
    EmptyDocument,
}

/// Extract raw text from PDF bytes. Page boundaries are not retained —
/// downstream passage selection and chunking work on one flat string.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::PdfError(e.to_string()))?;

    if text.trim().is_empty() {
        // pdf-extract succeeded but found no text layer.
        return Err(ExtractionError::EmptyDocument);
    }

    tracing::debug!("extracted {} chars from PDF", text.len());
    Ok(text)
}
