//! # windows-media-tts
//!
//! A Rust library providing text-to-speech synthesis through the platform's
//! native speech engine, selected at runtime from the host OS and architecture.
//!
//! ## Features
//!
//! - **Windows Media TTS**: WinRT `SpeechSynthesizer` on Windows x64 and arm64
//! - **Optional SSML**: wrap plain text in an SSML envelope matching the voice's language
//! - **Timing metadata**: markers and word/sentence boundary cues from the engine
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! windows-media-tts = "0.1"
//! ```
//!
//! ```ignore
//! use std::path::PathBuf;
//! use windows_media_tts::{synthesize, SynthesisOptions};
//!
//! let options = SynthesisOptions::builder()
//!     .voice_name("Microsoft David")
//!     .enable_ssml(true)
//!     .build()?;
//!
//! let result = synthesize("Hello, world!", Some(options))?;
//! result.write_audio(&PathBuf::from("output.wav"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod engines;
pub mod error;
pub mod options;
pub mod platform;
pub mod ssml;
pub mod synthesizer;
pub mod voice;

#[cfg(test)]
pub(crate) mod testing;

use std::io::Cursor;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use error::TtsError;
pub use options::{EngineOptions, SynthesisOptions, SynthesisOptionsBuilder};
pub use platform::{EngineProvider, Platform, PlatformResolver};
pub use synthesizer::Synthesizer;

/// A timing marker reported by the engine, e.g. for an SSML `<mark>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    #[serde(rename = "type")]
    pub marker_type: String,
    pub text: String,
    /// Seconds from the start of the audio.
    pub time: f64,
}

/// A single cue of a [`TimedMetadataTrack`]. Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cue {
    pub id: String,
    pub start_time: f64,
    pub duration: f64,
}

/// Boundary metadata (words, sentences) the engine attached to the audio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedMetadataTrack {
    pub id: String,
    pub cues: Vec<Cue>,
}

/// The result of a synthesis (text-to-speech) operation.
///
/// The audio payload is kept exactly as the engine produced it; its format is
/// described by `audio_content_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisResult {
    pub audio_content_type: String,
    pub audio_data: Vec<u8>,
    pub markers: Vec<Marker>,
    pub timed_metadata_tracks: Vec<TimedMetadataTrack>,
}

/// PCM samples decoded from a WAV [`SynthesisResult`].
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Interleaved samples normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u16,
}

impl DecodedAudio {
    /// Duration of the audio in seconds.
    pub fn duration_secs(&self) -> f64 {
        let frames = self.samples.len() / self.channels.max(1) as usize;
        frames as f64 / self.sample_rate as f64
    }
}

impl SynthesisResult {
    /// Write the audio payload to a file, unchanged.
    pub fn write_audio(&self, path: &Path) -> Result<(), TtsError> {
        std::fs::write(path, &self.audio_data)?;
        Ok(())
    }

    /// Whether the engine reported WAV audio.
    pub fn is_wav(&self) -> bool {
        matches!(
            self.audio_content_type.to_ascii_lowercase().as_str(),
            "audio/wav" | "audio/x-wav" | "audio/wave"
        )
    }

    /// Decode the WAV payload into normalized f32 samples.
    pub fn decode_wav(&self) -> Result<DecodedAudio, TtsError> {
        if !self.is_wav() {
            return Err(TtsError::NotWav(self.audio_content_type.clone()));
        }

        let mut reader = hound::WavReader::new(Cursor::new(self.audio_data.as_slice()))?;
        let spec = reader.spec();
        let samples = match spec.sample_format {
            hound::SampleFormat::Float => {
                reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?
            }
            hound::SampleFormat::Int => {
                let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|s| s as f32 / scale))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(DecodedAudio {
            samples,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// A voice from the engine's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceInfo {
    pub id: String,
    pub display_name: String,
    pub description: String,
    /// BCP-47 language tag, e.g. `"en-US"`
    pub language: String,
    pub gender: Gender,
}

/// Common interface for native speech engines.
///
/// An engine handle is shared process-wide by [`PlatformResolver`], so
/// implementations take `&self`. Concurrent synthesis calls on one handle are
/// not guaranteed to be safe unless the implementation says so.
pub trait SpeechEngine: Send + Sync {
    /// Name of the native binding, e.g. `"windows-x64"`.
    fn name(&self) -> &str;

    /// Synthesize speech from the given text (plain or SSML, per `options.enable_ssml`).
    fn synthesize(&self, text: &str, options: &EngineOptions)
        -> Result<SynthesisResult, TtsError>;

    /// All voices installed for the engine.
    fn voice_list(&self) -> Result<Vec<VoiceInfo>, TtsError>;

    /// Look up a voice by id, display name or description.
    fn voice_info(&self, name: &str) -> Result<Option<VoiceInfo>, TtsError>;

    fn default_voice_info(&self) -> Result<VoiceInfo, TtsError>;

    /// Liveness check. The default reports a loaded engine.
    fn is_loaded(&self) -> Result<bool, TtsError> {
        Ok(true)
    }
}

/// Synthesize `text` with the engine for the current platform.
///
/// `None` options are the same as `Some(SynthesisOptions::default())`.
pub fn synthesize(
    text: &str,
    options: Option<SynthesisOptions>,
) -> Result<SynthesisResult, TtsError> {
    Synthesizer::new().synthesize(text, options)
}

pub fn get_voice_list() -> Result<Vec<VoiceInfo>, TtsError> {
    Synthesizer::new().voice_list()
}

pub fn get_voice_info(name: &str) -> Result<Option<VoiceInfo>, TtsError> {
    Synthesizer::new().voice_info(name)
}

pub fn get_default_voice_info() -> Result<VoiceInfo, TtsError> {
    Synthesizer::new().default_voice_info()
}

/// Whether the native engine for the current platform can be used. Never fails.
pub fn is_addon_available() -> bool {
    Synthesizer::new().is_available()
}
