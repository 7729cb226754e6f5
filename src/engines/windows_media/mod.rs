//! Windows Media speech engine.
//!
//! Binds the WinRT `Windows.Media.SpeechSynthesis.SpeechSynthesizer`, which
//! ships with Windows 10 and later. Installed voices are managed in the Windows
//! settings app (Time & Language → Speech); this crate only reads the catalog.
//!
//! # Output
//!
//! - Audio is returned as the engine produces it, normally `audio/wav`.
//! - Word and sentence boundary metadata is always requested and reported in
//!   [`SynthesisResult::timed_metadata_tracks`](crate::SynthesisResult).
//! - SSML `<mark>` elements are reported in
//!   [`SynthesisResult::markers`](crate::SynthesisResult).
//!
//! # Example
//!
//! ```rust,no_run
//! use windows_media_tts::{Synthesizer, SynthesisOptions};
//! use std::path::PathBuf;
//!
//! let synth = Synthesizer::new();
//!
//! let options = SynthesisOptions::builder()
//!     .voice_name("Microsoft Zira")
//!     .speaking_rate(0.9)
//!     .build()?;
//!
//! let result = synth.synthesize("Hello from Zira!", Some(options))?;
//! result.write_audio(&PathBuf::from("out.wav"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Platform Support
//!
//! The engine is compiled only for Windows targets with the `windows-media`
//! feature. Elsewhere [`WindowsMediaProvider::load`] fails with
//! [`TtsError::EngineLoad`].

#[cfg(all(windows, feature = "windows-media"))]
pub mod engine;

use std::sync::Arc;

use crate::error::TtsError;
use crate::platform::EngineProvider;
use crate::SpeechEngine;

#[cfg(all(windows, feature = "windows-media"))]
pub use engine::WindowsMediaEngine;

/// WinRT times are counted in 100-nanosecond ticks.
const TICKS_PER_SECOND: f64 = 10_000_000.0;

/// Convert a WinRT `TimeSpan` tick count to seconds.
pub fn ticks_to_secs(ticks: i64) -> f64 {
    ticks as f64 / TICKS_PER_SECOND
}

/// Loads the Windows Media engine for one architecture binding.
pub struct WindowsMediaProvider {
    binding: &'static str,
}

impl WindowsMediaProvider {
    pub fn new(binding: &'static str) -> Self {
        Self { binding }
    }
}

impl EngineProvider for WindowsMediaProvider {
    fn engine_name(&self) -> &str {
        self.binding
    }

    #[cfg(all(windows, feature = "windows-media"))]
    fn load(&self) -> Result<Arc<dyn SpeechEngine>, TtsError> {
        let engine = WindowsMediaEngine::load(self.binding).map_err(|e| TtsError::EngineLoad {
            engine: self.binding.to_string(),
            reason: e.message().to_string(),
        })?;
        Ok(Arc::new(engine))
    }

    #[cfg(not(all(windows, feature = "windows-media")))]
    fn load(&self) -> Result<Arc<dyn SpeechEngine>, TtsError> {
        Err(TtsError::EngineLoad {
            engine: self.binding.to_string(),
            reason: "the Windows Media speech engine is not compiled into this build".to_string(),
        })
    }
}
