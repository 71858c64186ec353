use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;

use crate::{
    domain::extraction::{ExtractedDocument, ExtractionService, ExtractionServiceApi},
    error::{AppError, AppResult},
    infrastructure::http::RequestId,
};

/// Multipart field carrying the PDF
pub const FILE_FIELD: &str = "file";

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";

pub struct UploadController {
    extraction_service: Arc<ExtractionService>,
}

impl UploadController {
    pub fn new(extraction_service: Arc<ExtractionService>) -> Self {
        Self { extraction_service }
    }

    /// POST /upload - Extract the text of an uploaded PDF
    pub async fn upload(
        State(controller): State<Arc<UploadController>>,
        Extension(request_id): Extension<RequestId>,
        multipart: Result<Multipart, MultipartRejection>,
    ) -> AppResult<(StatusCode, Json<ExtractedDocument>)> {
        let multipart = multipart.map_err(|e| {
            tracing::warn!(request_id = %request_id.0, error = %e, "Upload is not a multipart form");
            AppError::BadRequest(NO_FILE_MESSAGE.to_string())
        })?;

        let pdf_bytes = read_file_field(multipart, &request_id).await?.ok_or_else(|| {
            tracing::warn!(request_id = %request_id.0, "No file field found in multipart upload");
            AppError::BadRequest(NO_FILE_MESSAGE.to_string())
        })?;

        let document = controller
            .extraction_service
            .extract(pdf_bytes)
            .await
            .map_err(AppError::from)?;

        Ok((StatusCode::OK, Json(document)))
    }
}

/// Read the first `file` part carrying a filename, skipping any other fields.
/// A plain text field named `file` is not an upload.
async fn read_file_field(
    mut multipart: Multipart,
    request_id: &RequestId,
) -> AppResult<Option<Bytes>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, request_id))?
    {
        let filename = match (field.name(), field.file_name()) {
            (Some(FILE_FIELD), Some(filename)) => filename.to_string(),
            (name, filename) => {
                tracing::debug!(
                    request_id = %request_id.0,
                    name = ?name,
                    filename = ?filename,
                    "Skipping multipart field"
                );
                continue;
            }
        };
        let content_type = field.content_type().map(|s| s.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| multipart_error(e, request_id))?;

        tracing::debug!(
            request_id = %request_id.0,
            filename = %filename,
            content_type = ?content_type,
            size_bytes = data.len(),
            "Received upload"
        );

        return Ok(Some(data));
    }

    Ok(None)
}

fn multipart_error(err: MultipartError, request_id: &RequestId) -> AppError {
    tracing::warn!(
        request_id = %request_id.0,
        error = %err,
        "Failed to read multipart body"
    );

    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(NO_FILE_MESSAGE.to_string())
    }
}
