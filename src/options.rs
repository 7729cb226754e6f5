use std::path::Path;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::error::TtsError;

/// Caller-supplied synthesis options.
///
/// Every field is optional. Fields left as `None` take the documented default
/// when the options are merged into [`EngineOptions`], so an empty value and
/// `SynthesisOptions::default()` are equivalent.
///
/// ```rust
/// use windows_media_tts::SynthesisOptions;
///
/// let options = SynthesisOptions::builder()
///     .voice_name("Microsoft David")
///     .enable_ssml(true)
///     .build()?;
///
/// let merged = options.merged();
/// assert_eq!(merged.speaking_rate, 1.0);
/// assert!(merged.enable_ssml);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default, setter(into, strip_option))]
#[serde(rename_all = "camelCase", default)]
pub struct SynthesisOptions {
    /// Voice id, display name or description (e.g. `"Microsoft David"`).
    pub voice_name: Option<String>,
    /// Speaking rate multiplier. Default 1.0.
    pub speaking_rate: Option<f64>,
    /// Audio pitch multiplier. Default 1.0.
    pub audio_pitch: Option<f64>,
    /// Treat the text as content of an SSML envelope. Default false.
    pub enable_ssml: Option<bool>,
    /// Log the engine's progress while synthesizing. Default false.
    pub enable_trace: Option<bool>,
}

impl SynthesisOptions {
    pub fn builder() -> SynthesisOptionsBuilder {
        SynthesisOptionsBuilder::default()
    }

    /// Parse options from a JSON object such as `{"voiceName": "Microsoft Zira", "enableSsml": true}`.
    pub fn from_json_str(json: &str) -> Result<Self, TtsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, TtsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Merge these options over [`EngineOptions::default`].
    pub fn merged(&self) -> EngineOptions {
        let defaults = EngineOptions::default();
        EngineOptions {
            voice_name: self.voice_name.clone().unwrap_or(defaults.voice_name),
            speaking_rate: self.speaking_rate.unwrap_or(defaults.speaking_rate),
            audio_pitch: self.audio_pitch.unwrap_or(defaults.audio_pitch),
            enable_ssml: self.enable_ssml.unwrap_or(defaults.enable_ssml),
            enable_trace: self.enable_trace.unwrap_or(defaults.enable_trace),
        }
    }
}

/// Fully resolved options handed to a [`SpeechEngine`](crate::SpeechEngine).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineOptions {
    /// Empty means the engine's default voice.
    pub voice_name: String,
    pub speaking_rate: f64,
    pub audio_pitch: f64,
    pub enable_ssml: bool,
    pub enable_trace: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            voice_name: String::new(),
            speaking_rate: 1.0,
            audio_pitch: 1.0,
            enable_ssml: false,
            enable_trace: false,
        }
    }
}
