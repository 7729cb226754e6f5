//! In-memory engine and provider for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::platform::EngineProvider;
use crate::{
    Cue, EngineOptions, Gender, Marker, SpeechEngine, SynthesisResult, TimedMetadataTrack,
    TtsError, VoiceInfo,
};

fn voice(id: &str, display_name: &str, language: &str, gender: Gender) -> VoiceInfo {
    VoiceInfo {
        id: id.to_string(),
        display_name: display_name.to_string(),
        description: format!("{display_name} - {language}"),
        language: language.to_string(),
        gender,
    }
}

/// Echoes the input text bytes as audio and records what it was asked to do.
pub struct MockEngine {
    voices: Vec<VoiceInfo>,
    default_voice: usize,
    loaded: bool,
    calls: Mutex<Vec<(String, EngineOptions)>>,
    catalog_lookups: AtomicUsize,
}

impl MockEngine {
    pub fn new() -> Self {
        Self {
            voices: vec![
                voice("MSTTS_V110_enUS_DavidM", "Microsoft David", "en-US", Gender::Male),
                voice("MSTTS_V110_enUS_ZiraM", "Microsoft Zira", "en-US", Gender::Female),
                voice("MSTTS_V110_enGB_HazelM", "Microsoft Hazel", "en-GB", Gender::Female),
                voice("MSTTS_V110_frFR_PaulM", "Microsoft Paul", "fr-FR", Gender::Male),
            ],
            default_voice: 0,
            loaded: true,
            calls: Mutex::new(Vec::new()),
            catalog_lookups: AtomicUsize::new(0),
        }
    }

    /// An engine that resolved but reports itself as not loaded.
    pub fn unloaded() -> Self {
        Self {
            loaded: false,
            ..Self::new()
        }
    }

    pub fn voices(&self) -> &[VoiceInfo] {
        &self.voices
    }

    /// Text and options of every `synthesize` call, oldest first.
    pub fn calls(&self) -> Vec<(String, EngineOptions)> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of `voice_info` and `default_voice_info` calls so far.
    pub fn catalog_lookups(&self) -> usize {
        self.catalog_lookups.load(Ordering::SeqCst)
    }

    pub fn last_text(&self) -> Option<String> {
        self.calls().pop().map(|(text, _)| text)
    }
}

impl SpeechEngine for MockEngine {
    fn name(&self) -> &str {
        "mock"
    }

    fn synthesize(
        &self,
        text: &str,
        options: &EngineOptions,
    ) -> Result<SynthesisResult, TtsError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), options.clone()));

        Ok(SynthesisResult {
            audio_content_type: "audio/wav".to_string(),
            audio_data: text.as_bytes().to_vec(),
            markers: vec![Marker {
                marker_type: "SpeechBookmark".to_string(),
                text: "a".to_string(),
                time: 0.25,
            }],
            timed_metadata_tracks: vec![TimedMetadataTrack {
                id: "SpeechWord".to_string(),
                cues: vec![Cue {
                    id: String::new(),
                    start_time: 0.0,
                    duration: 0.25,
                }],
            }],
        })
    }

    fn voice_list(&self) -> Result<Vec<VoiceInfo>, TtsError> {
        Ok(self.voices.clone())
    }

    fn voice_info(&self, name: &str) -> Result<Option<VoiceInfo>, TtsError> {
        self.catalog_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .voices
            .iter()
            .find(|v| v.id == name || v.display_name == name || v.description == name)
            .cloned())
    }

    fn default_voice_info(&self) -> Result<VoiceInfo, TtsError> {
        self.catalog_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.voices[self.default_voice].clone())
    }

    fn is_loaded(&self) -> Result<bool, TtsError> {
        Ok(self.loaded)
    }
}

/// Hands out a fixed engine (or fails) and counts load attempts.
pub struct MockProvider {
    engine: Option<Arc<MockEngine>>,
    loads: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn new(engine: Arc<MockEngine>) -> Self {
        Self {
            engine: Some(engine),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            engine: None,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn loads(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.loads)
    }

    pub fn boxed(self) -> Box<dyn EngineProvider> {
        Box::new(self)
    }
}

impl EngineProvider for MockProvider {
    fn engine_name(&self) -> &str {
        "mock"
    }

    fn load(&self) -> Result<Arc<dyn SpeechEngine>, TtsError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        match &self.engine {
            Some(engine) => Ok(Arc::clone(engine) as Arc<dyn SpeechEngine>),
            None => Err(TtsError::EngineLoad {
                engine: "mock".to_string(),
                reason: "artifact missing".to_string(),
            }),
        }
    }
}
