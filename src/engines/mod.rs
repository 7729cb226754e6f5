//! Native speech engine bindings.
//!
//! This module contains the platform engines the default
//! [`PlatformResolver`](crate::PlatformResolver) dispatches to.
//!
//! # Available Engines
//!
//! | Platform | Binding | Cargo feature |
//! |---|---|---|
//! | `windows` / `x86_64` | `windows-x64` | `windows-media` (default) |
//! | `windows` / `aarch64` | `windows-arm64` | `windows-media` (default) |

pub mod windows_media;

use crate::platform::{EngineProvider, Platform};

use windows_media::WindowsMediaProvider;

/// Provider table for every supported platform.
pub fn default_providers() -> Vec<(Platform, Box<dyn EngineProvider>)> {
    let windows_media =
        |binding| -> Box<dyn EngineProvider> { Box::new(WindowsMediaProvider::new(binding)) };

    vec![
        (Platform::new("windows", "x86_64"), windows_media("windows-x64")),
        (Platform::new("windows", "aarch64"), windows_media("windows-arm64")),
    ]
}
