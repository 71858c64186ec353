use async_trait::async_trait;
use axum::body::Bytes;

/// Repository for PDF-to-text extraction.
/// Abstracts the underlying parsing library (pdf-extract, lopdf, pdfium, etc.)
///
/// Implementations are responsible for:
/// - Decoding the raw PDF payload
/// - Returning the text content of every page, in reading order
/// - Turning parser failures (including panics) into errors
#[async_trait]
pub trait PdfTextRepository: Send + Sync {
    /// Extract the plain text of a PDF held in memory
    ///
    /// # Arguments
    /// * `pdf_bytes` - The uploaded payload, expected to be a PDF
    ///
    /// # Errors
    /// Returns a description of the failure if the payload cannot be parsed
    async fn extract_text(&self, pdf_bytes: Bytes) -> Result<String, String>;
}
