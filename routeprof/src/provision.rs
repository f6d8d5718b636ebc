//! Sample output directory provisioning
//!
//! Runs synchronously during the load phase, once per enabled scope with a
//! configured directory, after the pure merge pass has resolved the scope
//! tree. The request path never touches the filesystem.

use std::fs;
use std::io::ErrorKind;
use std::os::unix::fs::DirBuilderExt;
use std::path::Path;

use log::info;

use crate::domain::ConfigError;

/// Creation mode for sample output directories (0744).
const DIR_ACCESS_MODE: u32 = 0o744;

#[allow(clippy::cast_sign_loss)]
const MAX_PATH_LEN: usize = libc::PATH_MAX as usize;

/// Ensure `path` exists and is a directory, creating it if absent.
///
/// Idempotent: an existing directory is accepted without modification.
///
/// # Errors
///
/// - [`ConfigError::PathTooLong`] if `path` exceeds the platform limit
/// - [`ConfigError::StatFailed`] if the path cannot be inspected
/// - [`ConfigError::NotADirectory`] if something else lives at `path`
/// - [`ConfigError::CreateFailed`] if directory creation fails
pub fn ensure_directory(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_PATH_LEN {
        return Err(ConfigError::PathTooLong { path: path.to_path_buf() });
    }

    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(ConfigError::NotADirectory { path: path.to_path_buf() }),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::DirBuilder::new().mode(DIR_ACCESS_MODE).create(path).map_err(|source| {
                ConfigError::CreateFailed { path: path.to_path_buf(), source }
            })?;
            info!("created sample output directory {}", path.display());
            Ok(())
        }
        Err(source) => Err(ConfigError::StatFailed { path: path.to_path_buf(), source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn test_creates_missing_directory_with_mode() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("prof");

        ensure_directory(&target).expect("first ensure should create");
        assert!(target.is_dir());

        // umask may clear group/other bits; owner bits always survive
        let mode = fs::metadata(&target).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o700);
        assert_eq!(mode & 0o033, 0);
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("prof");

        ensure_directory(&target).expect("first ensure");
        ensure_directory(&target).expect("second ensure on existing directory");
        assert!(target.is_dir());
    }

    #[test]
    fn test_plain_file_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("prof");
        fs::write(&target, b"not a directory").unwrap();

        for _ in 0..2 {
            let err = ensure_directory(&target).unwrap_err();
            assert!(matches!(err, ConfigError::NotADirectory { .. }));
        }
    }

    #[test]
    fn test_overlong_path_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a".repeat(MAX_PATH_LEN + 1));

        let err = ensure_directory(&target).unwrap_err();
        assert!(matches!(err, ConfigError::PathTooLong { .. }));
    }
}
