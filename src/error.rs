#[derive(thiserror::Error, Debug)]
pub enum TtsError {
    #[error("platform {os}, {arch} is not supported")]
    UnsupportedPlatform { os: String, arch: String },
    #[error("failed to load speech engine '{engine}': {reason}")]
    EngineLoad { engine: String, reason: String },
    #[error("speech engine error: {0}")]
    Engine(String),
    #[cfg(all(windows, feature = "windows-media"))]
    #[error(transparent)]
    Windows(#[from] windows::core::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WAV decode error: {0}")]
    Wav(#[from] hound::Error),
    #[error("invalid synthesis options: {0}")]
    Options(#[from] serde_json::Error),
    #[error("audio content type '{0}' is not WAV")]
    NotWav(String),
}

#[cfg(test)]
mod tests {
    use super::TtsError;

    #[test]
    fn messages_start_lowercase() {
        let errors = [
            TtsError::UnsupportedPlatform {
                os: "linux".to_string(),
                arch: "x86_64".to_string(),
            },
            TtsError::EngineLoad {
                engine: "windows-x64".to_string(),
                reason: "not compiled in".to_string(),
            },
            TtsError::Engine("stream closed".to_string()),
            TtsError::Options(serde_json::from_str::<u8>("x").unwrap_err()),
            TtsError::NotWav("audio/mpeg".to_string()),
        ];
        for err in errors {
            let message = err.to_string();
            assert!(
                message.starts_with(|c: char| c.is_lowercase()),
                "{message}"
            );
        }
    }

    #[test]
    fn engine_load_names_binding_and_reason() {
        let err = TtsError::EngineLoad {
            engine: "windows-arm64".to_string(),
            reason: "not compiled in".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to load speech engine 'windows-arm64': not compiled in"
        );
    }
}
