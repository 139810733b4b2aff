//! Document text extraction for uploaded resumes and job descriptions.
//!
//! Dispatches on the uploaded file's extension. PDF goes through
//! pdf-extract; txt and markdown are decoded as UTF-8 with a lossy
//! fallback. Anything else is an unsupported format.

use crate::errors::AppError;

/// Upload formats the service can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Txt,
    Markdown,
}

impl DocumentKind {
    /// Determines the kind from a file name's extension, case-insensitive.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let ext = file_name.rsplit_once('.').map(|(_, ext)| ext)?;
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Txt),
            "md" => Some(DocumentKind::Markdown),
            _ => None,
        }
    }
}

/// Extracts plain text from an uploaded document.
///
/// Returns `UnsupportedFormat` for extensions the service cannot read
/// (including DOCX) and `ReadError` when a supported file cannot be parsed.
pub fn extract_text(file_name: &str, bytes: &[u8]) -> Result<String, AppError> {
    let kind = DocumentKind::from_file_name(file_name).ok_or_else(|| {
        AppError::UnsupportedFormat(format!(
            "'{file_name}' is not a supported format (expected .pdf, .txt, or .md)"
        ))
    })?;

    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| AppError::ReadError(format!("failed to read PDF '{file_name}': {e}")))?,
        DocumentKind::Txt | DocumentKind::Markdown => {
            // Try UTF-8 first, fall back to lossy conversion
            String::from_utf8(bytes.to_vec())
                .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned())
        }
    };

    Ok(text.trim().to_string())
}
