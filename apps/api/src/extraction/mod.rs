//! Text extraction — turns uploaded bytes into best-effort plain text.
//!
//! Extraction never fails from the caller's point of view: unreadable input
//! logs a warning and yields an empty string, which the ranker scores as an
//! empty resume.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};

const PDF_MAGIC: &[u8] = b"%PDF";

/// Pluggable text extraction backend.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the plain text of `content`, or `""` if nothing could be read.
    async fn extract(&self, file_name: &str, content: Bytes) -> String;
}

/// Reads PDFs with `pdf-extract` and anything else as UTF-8 text.
///
/// PDF parsing runs on the blocking pool. No OCR fallback: image-only PDFs
/// come back empty.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, file_name: &str, content: Bytes) -> String {
        if !is_pdf(&content) {
            debug!("{file_name}: no PDF header, reading as plain text");
            return String::from_utf8_lossy(&content).trim().to_string();
        }

        let name = file_name.to_string();
        let result =
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&content)).await;

        match result {
            Ok(Ok(text)) => {
                let text = text.trim().to_string();
                if text.is_empty() {
                    warn!("{name}: PDF contains no extractable text");
                }
                text
            }
            Ok(Err(e)) => {
                warn!("{name}: PDF extraction failed: {e}");
                String::new()
            }
            Err(e) => {
                warn!("{name}: PDF extraction task aborted: {e}");
                String::new()
            }
        }
    }
}

fn is_pdf(content: &[u8]) -> bool {
    content.starts_with(PDF_MAGIC)
}
