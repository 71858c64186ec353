use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum ExtractionServiceError {
    /// The payload could not be turned into text (corrupt, not a PDF, parser failure)
    #[error("unreadable pdf: {0}")]
    Unreadable(String),
}

impl From<ExtractionServiceError> for AppError {
    fn from(err: ExtractionServiceError) -> Self {
        match err {
            ExtractionServiceError::Unreadable(msg) => AppError::ExtractionFailed(msg),
        }
    }
}
