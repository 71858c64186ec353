use super::error::ClientError;
use crate::controllers::upload::FILE_FIELD;
use crate::domain::extraction::ExtractedDocument;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use std::path::Path;

/// A local file picked for upload. No type or size checks are made.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PdfFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub async fn open(path: impl AsRef<Path>) -> Result<Self, ClientError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.pdf".to_string());

        Ok(Self { name, bytes })
    }
}

/// Transport to the extraction service
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    /// Upload a file and return the cleaned text
    async fn extract(&self, file: PdfFile) -> Result<String, ClientError>;
}

pub struct HttpExtractionClient {
    upload_url: String,
    http_client: reqwest::Client,
}

impl HttpExtractionClient {
    /// `base_url` is the service root, e.g. `http://localhost:5000`
    pub fn new(base_url: &str) -> Self {
        Self {
            upload_url: format!("{}/upload", base_url.trim_end_matches('/')),
            http_client: reqwest::Client::new(),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

#[async_trait]
impl ExtractionClient for HttpExtractionClient {
    async fn extract(&self, file: PdfFile) -> Result<String, ClientError> {
        tracing::debug!(
            url = %self.upload_url,
            filename = %file.name,
            size_bytes = file.bytes.len(),
            "Uploading PDF"
        );

        let part = Part::bytes(file.bytes).file_name(file.name);
        let form = Form::new().part(FILE_FIELD, part);

        let response = self
            .http_client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(ClientError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = status.as_u16(), body = %body, "Upload rejected");
            return Err(ClientError::UploadRejected(status.as_u16()));
        }

        let document: ExtractedDocument = response.json().await.map_err(ClientError::Decode)?;

        Ok(document.text)
    }
}
