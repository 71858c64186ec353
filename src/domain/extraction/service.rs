use super::cleaning::clean_text;
use super::error::ExtractionServiceError;
use super::ExtractedDocument;
use crate::infrastructure::repositories::PdfTextRepository;
use async_trait::async_trait;
use axum::body::Bytes;
use std::sync::Arc;

pub struct ExtractionService {
    pdf_repo: Arc<dyn PdfTextRepository>,
}

impl ExtractionService {
    pub fn new(pdf_repo: Arc<dyn PdfTextRepository>) -> Self {
        Self { pdf_repo }
    }
}

#[async_trait]
pub trait ExtractionServiceApi: Send + Sync {
    /// Extract and clean the text of an uploaded PDF
    ///
    /// Either the whole document is extracted or the call fails; there are no
    /// partial results and no retries.
    async fn extract(&self, pdf_bytes: Bytes) -> Result<ExtractedDocument, ExtractionServiceError>;
}

#[async_trait]
impl ExtractionServiceApi for ExtractionService {
    async fn extract(&self, pdf_bytes: Bytes) -> Result<ExtractedDocument, ExtractionServiceError> {
        let size_bytes = pdf_bytes.len();
        tracing::info!(size_bytes, "PDF extraction request");

        let raw_text = self
            .pdf_repo
            .extract_text(pdf_bytes)
            .await
            .map_err(ExtractionServiceError::Unreadable)?;

        let text = clean_text(&raw_text);

        tracing::info!(
            raw_length = raw_text.len(),
            cleaned_length = text.len(),
            "Text cleaned"
        );

        Ok(ExtractedDocument { text })
    }
}
