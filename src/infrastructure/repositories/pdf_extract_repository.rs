use super::pdf_text_repository::PdfTextRepository;
use async_trait::async_trait;
use axum::body::Bytes;

/// pdf-extract implementation of the PDF text repository
#[derive(Debug, Default, Clone)]
pub struct PdfExtractRepository;

impl PdfExtractRepository {
    pub fn new() -> Self {
        Self
    }

    fn extract_blocking(pdf_bytes: &[u8]) -> Result<String, String> {
        pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| format!("pdf-extract error: {:?}", e))
    }
}

#[async_trait]
impl PdfTextRepository for PdfExtractRepository {
    async fn extract_text(&self, pdf_bytes: Bytes) -> Result<String, String> {
        // Parsing is CPU bound and the parser may panic on malformed input;
        // a panic surfaces here as a JoinError.
        let result = tokio::task::spawn_blocking(move || Self::extract_blocking(&pdf_bytes))
            .await
            .map_err(|e| format!("PDF parser aborted: {}", e))?;

        if let Err(e) = &result {
            tracing::warn!(error = %e, "PDF text extraction failed");
        }

        result
    }
}
