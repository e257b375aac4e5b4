//! File system operations (write, permissions).

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        fs::write(path, contents).context("Failed to write to file")?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub(crate) fn make_executable_impl(&self, path: &Path) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(path)
                .context("Failed to read file permissions")?
                .permissions()
                .mode();
            // r-- becomes r-x for each class that can read
            let mode = mode | ((mode & 0o444) >> 2);
            fs::set_permissions(path, fs::Permissions::from_mode(mode))
                .context("Failed to set permissions")?;
        }
        #[cfg(not(unix))]
        {
            let _ = path; // Suppress unused warnings on non-Unix
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_real_runtime_write_truncates() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary");

        runtime.write(&file_path, b"a much longer first version").unwrap();
        assert!(file_path.exists());

        runtime.write(&file_path, b"short").unwrap();
        assert_eq!(std::fs::read(&file_path).unwrap(), b"short");
    }

    #[test]
    fn test_real_runtime_write_into_missing_dir_fails() {
        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("missing").join("binary");

        assert!(runtime.write(&file_path, b"content").is_err());
        assert!(!file_path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_real_runtime_make_executable() {
        use std::os::unix::fs::PermissionsExt;

        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary");
        runtime.write(&file_path, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o644)).unwrap();

        runtime.make_executable(&file_path).unwrap();

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }

    #[cfg(unix)]
    #[test]
    fn test_real_runtime_make_executable_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let runtime = RealRuntime;
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("binary");
        runtime.write(&file_path, b"data").unwrap();
        std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o600)).unwrap();

        runtime.make_executable(&file_path).unwrap();

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn test_real_runtime_make_executable_missing_file() {
        let runtime = RealRuntime;
        let result = runtime.make_executable(std::path::Path::new("/nonexistent/path/binary"));
        assert!(result.is_err() || cfg!(not(unix)));
    }
}
