use super::voice::Voice;
use tokio::sync::mpsc;

pub const MIN_RATE: f32 = 0.1;
pub const MAX_RATE: f32 = 2.0;
pub const MIN_PITCH: f32 = 0.0;
pub const MAX_PITCH: f32 = 2.0;

/// Speaking rate, clamped to [0.1, 2.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate(f32);

impl Rate {
    /// Out-of-range values are clamped; NaN falls back to the default
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_RATE, MAX_RATE))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Voice pitch, clamped to [0.0, 2.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pitch(f32);

impl Pitch {
    /// Out-of-range values are clamped; NaN falls back to the default
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_PITCH, MAX_PITCH))
    }

    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Pitch {
    fn default() -> Self {
        Self(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UtteranceId(pub u64);

impl std::fmt::Display for UtteranceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "utterance-{}", self.0)
    }
}

/// One unit of synthesized speech
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub voice: Voice,
    pub rate: Rate,
    pub pitch: Pitch,
}

/// Lifecycle callback of a single utterance
#[derive(Debug, Clone, PartialEq)]
pub enum UtteranceEventKind {
    Start,
    Pause,
    Resume,
    End,
    Error(String),
}

/// Notifications raised asynchronously by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Utterance {
        id: UtteranceId,
        kind: UtteranceEventKind,
    },
    VoicesChanged,
}

pub type EventSender = mpsc::UnboundedSender<EngineEvent>;

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("voice {0} is not available")]
    VoiceUnavailable(String),
    #[error("speech engine failure: {0}")]
    Engine(String),
}

/// Capability interface over the host's text-to-speech engine.
///
/// The engine is a singleton shared by the whole client: callers must cancel
/// an in-flight utterance before speaking a new one. Lifecycle callbacks are
/// delivered on the `events` channel handed to [`SpeechEngine::speak`], tagged
/// with the returned id.
pub trait SpeechEngine: Send {
    /// Voices installed on the host, unfiltered
    fn list_voices(&self) -> Vec<Voice>;

    /// Register for voice-list change notifications
    fn watch_voices(&mut self, _events: EventSender) {}

    fn speak(&mut self, utterance: Utterance, events: EventSender) -> Result<UtteranceId, SpeechError>;

    fn pause(&mut self);

    fn resume(&mut self);

    /// Drop the current utterance, if any. Must be safe to call when idle.
    fn cancel(&mut self);

    /// True while an utterance is speaking or paused
    fn is_busy(&self) -> bool;
}
