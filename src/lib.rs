pub mod config;
pub mod error;
pub mod http;
pub mod platform;
pub mod release;
pub mod runtime;
pub mod updater;

/// Test utilities for cross-platform path handling.
#[cfg(test)]
pub mod test_utils {
    use std::path::PathBuf;

    /// Returns the directory the application binary lives in during tests.
    /// - Unix: `/home/user/games/achievements`
    /// - Windows: `C:\Users\user\games\achievements`
    pub fn test_install_dir() -> PathBuf {
        #[cfg(not(windows))]
        {
            PathBuf::from("/home/user/games/achievements")
        }
        #[cfg(windows)]
        {
            PathBuf::from(r"C:\Users\user\games\achievements")
        }
    }
}
