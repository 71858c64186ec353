//! Upload & playback client.
//!
//! Host-agnostic counterpart of the extraction service: uploads a PDF, keeps
//! the extracted text editable and reads it aloud through whatever speech
//! engine the host provides.

pub mod error;
pub mod form;
pub mod speech;
pub mod upload;
pub mod voice;

pub use error::ClientError;
pub use form::{Controls, FormStatus, UploadForm};
pub use speech::{
    EngineEvent, EventSender, Pitch, Rate, SpeechEngine, SpeechError, Utterance,
    UtteranceEventKind, UtteranceId,
};
pub use upload::{ExtractionClient, HttpExtractionClient, PdfFile};
pub use voice::{voice_options, AllowAllVoices, VendorVoicePolicy, Voice, VoiceOption, VoicePolicy};
