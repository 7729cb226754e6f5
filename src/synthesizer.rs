use std::sync::Arc;

use crate::error::TtsError;
use crate::options::SynthesisOptions;
use crate::platform::{Platform, PlatformResolver};
use crate::{ssml, voice, SpeechEngine, SynthesisResult, VoiceInfo};

/// Entry point for synthesis requests against one platform's engine.
///
/// `Synthesizer::new()` targets the current host through the process-wide
/// resolver. Use [`Synthesizer::with_resolver`] to pick another resolver or
/// platform.
pub struct Synthesizer {
    resolver: Arc<PlatformResolver>,
    platform: Platform,
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::with_resolver(PlatformResolver::shared(), Platform::current())
    }

    pub fn with_resolver(resolver: Arc<PlatformResolver>, platform: Platform) -> Self {
        Self { resolver, platform }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    fn engine(&self) -> Result<Arc<dyn SpeechEngine>, TtsError> {
        self.resolver.resolve(&self.platform)
    }

    /// Synthesize `text`.
    ///
    /// With `enable_ssml` the text is wrapped in a `<speak>` envelope whose
    /// `xml:lang` is the language of the requested voice, or of the default
    /// voice when the name is empty or unknown. Otherwise the text reaches
    /// the engine unchanged.
    pub fn synthesize(
        &self,
        text: &str,
        options: Option<SynthesisOptions>,
    ) -> Result<SynthesisResult, TtsError> {
        let options = options.unwrap_or_default().merged();
        let engine = self.engine()?;

        if options.enable_ssml {
            let language =
                voice::resolve_language(engine.as_ref(), Some(options.voice_name.as_str()))?;
            let text = ssml::wrap(text, &language);
            return engine.synthesize(&text, &options);
        }

        engine.synthesize(text, &options)
    }

    pub fn voice_list(&self) -> Result<Vec<VoiceInfo>, TtsError> {
        self.engine()?.voice_list()
    }

    /// Look up a voice by id, display name or description. `None` if the
    /// engine has no such voice.
    pub fn voice_info(&self, name: &str) -> Result<Option<VoiceInfo>, TtsError> {
        self.engine()?.voice_info(name)
    }

    pub fn default_voice_info(&self) -> Result<VoiceInfo, TtsError> {
        self.engine()?.default_voice_info()
    }

    /// Whether the engine resolves and reports itself loaded.
    ///
    /// This is the only operation that does not propagate errors: any failure
    /// to resolve, load or query the engine yields `false`.
    pub fn is_available(&self) -> bool {
        match self.engine().and_then(|engine| engine.is_loaded()) {
            Ok(loaded) => loaded,
            Err(e) => {
                log::debug!("Speech engine unavailable on {}: {e}", self.platform);
                false
            }
        }
    }
}
