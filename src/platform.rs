//! Platform detection and the binary name expected for each platform.

use std::fmt;

/// Base name of the application binary published with each release.
pub const BINARY_NAME: &str = "achievements_enhanced";

/// Platform kind, determining asset naming and post-install permission handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformKind {
    Windows,
    Other,
}

impl PlatformKind {
    /// Detect the current platform from the compilation target.
    pub fn current() -> Self {
        #[cfg(windows)]
        {
            PlatformKind::Windows
        }
        #[cfg(not(windows))]
        {
            PlatformKind::Other
        }
    }

    /// Name of the release asset, which is also the local file it is installed to.
    pub fn asset_name(&self) -> String {
        match self {
            PlatformKind::Windows => format!("{}.exe", BINARY_NAME),
            PlatformKind::Other => BINARY_NAME.to_string(),
        }
    }

    /// Whether the installed file needs its execute bits set.
    pub fn needs_executable_bit(&self) -> bool {
        matches!(self, PlatformKind::Other)
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformKind::Windows => write!(f, "windows"),
            PlatformKind::Other => write!(f, "other"),
        }
    }
}
