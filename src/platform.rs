//! Selection of the native speech engine for a platform.
//!
//! A [`PlatformResolver`] maps `(os, arch)` pairs to [`EngineProvider`]s and
//! memoizes the engine each provider loads, so an engine is loaded at most once
//! per platform for the lifetime of the resolver. [`PlatformResolver::shared`]
//! is the process-wide instance used by the crate's free functions; tests and
//! embedders can build their own with [`PlatformResolver::with_providers`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, OnceLock};

use crate::engines;
use crate::error::TtsError;
use crate::SpeechEngine;

/// An operating system and processor architecture pair, using the identifiers
/// of [`std::env::consts::OS`] and [`std::env::consts::ARCH`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform {
    pub os: String,
    pub arch: String,
}

impl Platform {
    pub fn new(os: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// The platform this process runs on.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS, std::env::consts::ARCH)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.os, self.arch)
    }
}

/// Loads the native engine binding for one platform.
pub trait EngineProvider: Send + Sync {
    /// Name of the binding this provider loads, e.g. `"windows-arm64"`.
    fn engine_name(&self) -> &str;

    fn load(&self) -> Result<Arc<dyn SpeechEngine>, TtsError>;
}

pub struct PlatformResolver {
    providers: HashMap<Platform, Box<dyn EngineProvider>>,
    engines: Mutex<HashMap<Platform, Arc<dyn SpeechEngine>>>,
}

impl Default for PlatformResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformResolver {
    /// Create a resolver for the platforms this crate ships engines for.
    pub fn new() -> Self {
        Self::with_providers(engines::default_providers())
    }

    /// Create a resolver with an explicit provider table.
    pub fn with_providers(
        providers: impl IntoIterator<Item = (Platform, Box<dyn EngineProvider>)>,
    ) -> Self {
        Self {
            providers: providers.into_iter().collect(),
            engines: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide resolver, created on first use.
    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<PlatformResolver>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::new())).clone()
    }

    pub fn is_supported(&self, platform: &Platform) -> bool {
        self.providers.contains_key(platform)
    }

    /// Return the engine for `platform`, loading it on first use.
    ///
    /// Unsupported platforms fail with [`TtsError::UnsupportedPlatform`]
    /// without touching any provider. A failed load is not cached, so a later
    /// call tries again.
    ///
    /// The cache lock is held while a provider loads, so a slow first load
    /// blocks every other `resolve` on this resolver until it finishes.
    pub fn resolve(&self, platform: &Platform) -> Result<Arc<dyn SpeechEngine>, TtsError> {
        let provider = self
            .providers
            .get(platform)
            .ok_or_else(|| TtsError::UnsupportedPlatform {
                os: platform.os.clone(),
                arch: platform.arch.clone(),
            })?;

        let mut engines = self.engines.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(engine) = engines.get(platform) {
            return Ok(Arc::clone(engine));
        }

        log::debug!(
            "Loading {} speech engine for {}",
            provider.engine_name(),
            platform
        );
        let engine = provider.load()?;
        log::info!("Loaded {} speech engine", engine.name());

        engines.insert(platform.clone(), Arc::clone(&engine));
        Ok(engine)
    }
}
