use crate::error::TtsError;
use crate::SpeechEngine;

/// Resolve the language tag of the voice a synthesis call will use.
///
/// An absent or empty `voice_name` and a name the engine's catalog does not
/// know both resolve to the default voice's language. Unknown names are not an
/// error.
pub fn resolve_language(
    engine: &dyn SpeechEngine,
    voice_name: Option<&str>,
) -> Result<String, TtsError> {
    if let Some(name) = voice_name.filter(|name| !name.is_empty()) {
        if let Some(voice) = engine.voice_info(name)? {
            return Ok(voice.language);
        }
        log::debug!("Voice '{name}' not found, using the default voice's language");
    }

    Ok(engine.default_voice_info()?.language)
}
