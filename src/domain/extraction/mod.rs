pub mod cleaning;
pub mod error;
pub mod service;

pub use cleaning::clean_text;
pub use error::ExtractionServiceError;
pub use service::{ExtractionService, ExtractionServiceApi};

use serde::{Deserialize, Serialize};

/// Response for POST /upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub text: String,
}
