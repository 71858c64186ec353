use super::form::FormStatus;
use super::speech::SpeechError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("No PDF selected")]
    NoFileSelected,

    #[error("{0}")]
    Network(#[source] reqwest::Error),

    #[error("server responded with status {0}")]
    UploadRejected(u16),

    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no voice selected")]
    NoVoiceSelected,

    #[error("there is no text to read")]
    EmptyText,

    #[error("cannot {action} while {status}")]
    NotAllowed {
        action: &'static str,
        status: FormStatus,
    },

    #[error(transparent)]
    Speech(#[from] SpeechError),
}
