use serde::{Deserialize, Serialize};

/// Vendor whose voices are offered by default
pub const DEFAULT_VOICE_VENDOR: &str = "Microsoft";

/// A speech-synthesis persona provided by the host engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    pub language: String,
    #[serde(default)]
    pub is_default: bool,
}

impl Voice {
    pub fn new(id: impl Into<String>, name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            language: language.into(),
            is_default: false,
        }
    }
}

/// Decides which of the engine's voices are offered to the user
pub trait VoicePolicy: Send + Sync {
    fn allows(&self, voice: &Voice) -> bool;

    /// Label of the disabled entry shown when no voice is allowed
    fn placeholder(&self) -> &str;

    fn filter(&self, voices: Vec<Voice>) -> Vec<Voice> {
        voices.into_iter().filter(|v| self.allows(v)).collect()
    }
}

/// Keeps only voices whose name contains the vendor string (case-sensitive)
#[derive(Debug, Clone)]
pub struct VendorVoicePolicy {
    vendor: String,
    placeholder: String,
}

impl VendorVoicePolicy {
    pub fn new(vendor: impl Into<String>) -> Self {
        let vendor = vendor.into();
        let placeholder = format!("No {} voices available", vendor);
        Self {
            vendor,
            placeholder,
        }
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }
}

impl Default for VendorVoicePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_VOICE_VENDOR)
    }
}

impl VoicePolicy for VendorVoicePolicy {
    fn allows(&self, voice: &Voice) -> bool {
        voice.name.contains(&self.vendor)
    }

    fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

/// Offers every voice the engine reports
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAllVoices;

impl VoicePolicy for AllowAllVoices {
    fn allows(&self, _voice: &Voice) -> bool {
        true
    }

    fn placeholder(&self) -> &str {
        "No voices available"
    }
}

/// One entry of the voice selection list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

/// Selection list entries for already-filtered voices.
/// An empty list yields exactly one disabled placeholder entry.
pub fn voice_options(voices: &[Voice], placeholder: &str) -> Vec<VoiceOption> {
    if voices.is_empty() {
        return vec![VoiceOption {
            value: String::new(),
            label: placeholder.to_string(),
            disabled: true,
        }];
    }

    voices
        .iter()
        .map(|voice| VoiceOption {
            value: voice.id.clone(),
            label: voice.name.clone(),
            disabled: false,
        })
        .collect()
}
