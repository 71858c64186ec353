use super::error::ClientError;
use super::speech::{
    EngineEvent, EventSender, Pitch, Rate, SpeechEngine, SpeechError, Utterance,
    UtteranceEventKind, UtteranceId,
};
use super::upload::{ExtractionClient, PdfFile};
use super::voice::{voice_options, Voice, VoiceOption, VoicePolicy};
use tokio::sync::mpsc;

pub const NO_FILE_SELECTED_MESSAGE: &str = "No PDF selected";
pub const UPLOAD_SUCCESS_MESSAGE: &str = "File processed successfully!";

/// Where the form is in the upload/playback cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing extracted yet
    Idle,
    Uploading,
    /// Text available, nothing playing
    Ready,
    Speaking,
    Paused,
    /// Last upload failed
    Error,
}

impl FormStatus {
    pub fn is_playing(self) -> bool {
        matches!(self, FormStatus::Speaking | FormStatus::Paused)
    }
}

impl std::fmt::Display for FormStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FormStatus::Idle => "idle",
            FormStatus::Uploading => "uploading",
            FormStatus::Ready => "ready",
            FormStatus::Speaking => "speaking",
            FormStatus::Paused => "paused",
            FormStatus::Error => "error",
        };
        f.write_str(s)
    }
}

/// Which buttons are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub upload: bool,
    pub read: bool,
    pub pause: bool,
    pub resume: bool,
    pub stop: bool,
}

/// Upload form with text-to-speech playback.
///
/// Owns the speech engine; engine callbacks are queued on an internal channel
/// and applied by [`UploadForm::handle_event`], [`UploadForm::pump_events`] or
/// [`UploadForm::next_event`].
pub struct UploadForm<E, C, P> {
    engine: E,
    client: C,
    policy: P,
    status: FormStatus,
    file: Option<PdfFile>,
    text: Option<String>,
    message: Option<String>,
    voices: Vec<Voice>,
    selected_voice: Option<String>,
    rate: Rate,
    pitch: Pitch,
    current_utterance: Option<UtteranceId>,
    events_tx: EventSender,
    events_rx: mpsc::UnboundedReceiver<EngineEvent>,
}

impl<E, C, P> UploadForm<E, C, P>
where
    E: SpeechEngine,
    C: ExtractionClient,
    P: VoicePolicy,
{
    pub fn new(mut engine: E, client: C, policy: P) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        engine.watch_voices(events_tx.clone());

        let mut form = Self {
            engine,
            client,
            policy,
            status: FormStatus::Idle,
            file: None,
            text: None,
            message: None,
            voices: Vec::new(),
            selected_voice: None,
            rate: Rate::default(),
            pitch: Pitch::default(),
            current_utterance: None,
            events_tx,
            events_rx,
        };
        form.refresh_voices();
        form
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Extracted (and possibly edited) text; `None` until an upload succeeds
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn voices(&self) -> &[Voice] {
        &self.voices
    }

    pub fn voice_options(&self) -> Vec<VoiceOption> {
        voice_options(&self.voices, self.policy.placeholder())
    }

    pub fn selected_voice(&self) -> Option<&Voice> {
        let id = self.selected_voice.as_deref()?;
        self.voices.iter().find(|v| v.id == id)
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn controls(&self) -> Controls {
        let has_text = self.text.as_deref().is_some_and(|t| !t.is_empty());
        Controls {
            upload: self.status != FormStatus::Uploading,
            read: has_text && !self.status.is_playing() && self.status != FormStatus::Uploading,
            pause: self.status == FormStatus::Speaking,
            resume: self.status == FormStatus::Paused,
            stop: self.status.is_playing(),
        }
    }

    pub fn select_file(&mut self, file: Option<PdfFile>) {
        self.file = file;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn set_rate(&mut self, rate: f32) -> Rate {
        self.rate = Rate::new(rate);
        self.rate
    }

    pub fn set_pitch(&mut self, pitch: f32) -> Pitch {
        self.pitch = Pitch::new(pitch);
        self.pitch
    }

    /// Select one of the offered voices by id
    pub fn select_voice(&mut self, id: &str) -> Result<(), ClientError> {
        if !self.voices.iter().any(|v| v.id == id) {
            return Err(SpeechError::VoiceUnavailable(id.to_string()).into());
        }
        self.selected_voice = Some(id.to_string());
        Ok(())
    }

    /// Re-query the engine's voices through the policy. The current selection
    /// is kept while still offered, otherwise the first voice is selected.
    pub fn refresh_voices(&mut self) {
        self.voices = self.policy.filter(self.engine.list_voices());

        let still_offered = self
            .selected_voice
            .as_deref()
            .is_some_and(|id| self.voices.iter().any(|v| v.id == id));
        if !still_offered {
            self.selected_voice = self.voices.first().map(|v| v.id.clone());
        }

        tracing::debug!(
            offered = self.voices.len(),
            selected = ?self.selected_voice,
            "Voice list refreshed"
        );
    }

    /// First half of a submit: validate and enter `Uploading`.
    /// Returns the file to send.
    pub fn begin_submit(&mut self) -> Result<PdfFile, ClientError> {
        if self.status == FormStatus::Uploading {
            return Err(ClientError::NotAllowed {
                action: "upload",
                status: self.status,
            });
        }

        let Some(file) = self.file.clone() else {
            self.message = Some(NO_FILE_SELECTED_MESSAGE.to_string());
            return Err(ClientError::NoFileSelected);
        };

        // A new document replaces whatever is being read
        if self.status.is_playing() || self.current_utterance.is_some() {
            self.stop();
        }

        self.status = FormStatus::Uploading;
        self.message = None;
        Ok(file)
    }

    /// Second half of a submit: apply the service's answer and leave `Uploading`
    pub fn finish_submit(&mut self, result: Result<String, ClientError>) -> Result<(), ClientError> {
        match result {
            Ok(text) => {
                tracing::info!(text_length = text.len(), "Extraction succeeded");
                self.text = Some(text);
                self.status = FormStatus::Ready;
                self.message = Some(UPLOAD_SUCCESS_MESSAGE.to_string());
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Extraction failed");
                self.status = FormStatus::Error;
                self.message = Some(format!("Error during file upload: {}", e));
                Err(e)
            }
        }
    }

    /// Upload the selected file and populate the text on success
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        let file = self.begin_submit()?;
        let result = self.client.extract(file).await;
        self.finish_submit(result)
    }

    /// Speak the current text with the selected voice, rate and pitch.
    /// Any utterance in progress is cancelled first. Rejected while uploading.
    pub fn read(&mut self) -> Result<UtteranceId, ClientError> {
        if self.status == FormStatus::Uploading {
            return Err(ClientError::NotAllowed {
                action: "read",
                status: self.status,
            });
        }
        let text = match self.text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => return Err(ClientError::EmptyText),
        };
        let voice = self.selected_voice().cloned().ok_or(ClientError::NoVoiceSelected)?;

        if self.engine.is_busy() || self.current_utterance.is_some() {
            tracing::debug!(previous = ?self.current_utterance, "Cancelling utterance in progress");
            self.engine.cancel();
            self.current_utterance = None;
            self.settle();
        }

        let utterance = Utterance {
            text,
            voice,
            rate: self.rate,
            pitch: self.pitch,
        };
        let id = self.engine.speak(utterance, self.events_tx.clone())?;
        self.current_utterance = Some(id);

        tracing::info!(utterance = %id, "Utterance queued");
        Ok(id)
    }

    pub fn pause(&mut self) -> Result<(), ClientError> {
        if self.status != FormStatus::Speaking {
            return Err(ClientError::NotAllowed {
                action: "pause",
                status: self.status,
            });
        }
        self.engine.pause();
        self.status = FormStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), ClientError> {
        if self.status != FormStatus::Paused {
            return Err(ClientError::NotAllowed {
                action: "resume",
                status: self.status,
            });
        }
        self.engine.resume();
        self.status = FormStatus::Speaking;
        Ok(())
    }

    /// Cancel playback unconditionally
    pub fn stop(&mut self) {
        self.engine.cancel();
        self.current_utterance = None;
        self.settle();
    }

    /// Apply one engine callback. Callbacks of cancelled utterances are dropped.
    pub fn handle_event(&mut self, event: EngineEvent) {
        let (id, kind) = match event {
            EngineEvent::VoicesChanged => {
                self.refresh_voices();
                return;
            }
            EngineEvent::Utterance { id, kind } => (id, kind),
        };

        if self.current_utterance != Some(id) {
            tracing::debug!(utterance = %id, event = ?kind, "Ignoring event of stale utterance");
            return;
        }

        match kind {
            UtteranceEventKind::Start | UtteranceEventKind::Resume => {
                self.status = FormStatus::Speaking;
            }
            UtteranceEventKind::Pause => {
                self.status = FormStatus::Paused;
            }
            UtteranceEventKind::End => {
                self.current_utterance = None;
                self.settle();
            }
            UtteranceEventKind::Error(reason) => {
                tracing::warn!(utterance = %id, reason = %reason, "Speech failed");
                self.current_utterance = None;
                self.settle();
                self.message = Some(format!("Speech error: {}", reason));
            }
        }
    }

    /// Apply every queued engine callback; returns how many were applied
    pub fn pump_events(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            self.handle_event(event);
            applied += 1;
        }
        applied
    }

    /// Wait for the next engine callback and apply it
    pub async fn next_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.handle_event(event);
        }
    }

    /// Leave a playing status once nothing is being spoken
    fn settle(&mut self) {
        if self.status.is_playing() {
            self.status = if self.text.is_some() {
                FormStatus::Ready
            } else {
                FormStatus::Idle
            };
        }
    }
}
