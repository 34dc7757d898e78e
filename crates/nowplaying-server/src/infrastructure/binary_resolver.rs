//! Locates the media-status binary at startup.
//!
//! The preferred binary is either a path (anything with a directory
//! component) checked directly, or a bare name searched on `PATH`. When it
//! cannot be found, the bundled fallback is tried.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

/// Error returned when neither candidate is an executable file.
#[derive(Debug, Error, PartialEq)]
#[error(
    "no executable media-status binary: tried {} and fallback {}",
    .preferred.display(),
    .fallback.display()
)]
pub struct ResolveError {
    pub preferred: PathBuf,
    pub fallback: PathBuf,
}

/// Resolves the binary to run, searching the process `PATH`.
///
/// # Errors
///
/// Returns [`ResolveError`] if neither `preferred` nor `fallback` is an
/// executable file.
pub fn resolve_binary(preferred: &Path, fallback: &Path) -> Result<PathBuf, ResolveError> {
    let path_var = env::var_os("PATH");
    resolve_binary_in(preferred, fallback, path_var.as_deref())
}

/// Like [`resolve_binary`] but with an explicit `PATH` value.
pub fn resolve_binary_in(
    preferred: &Path,
    fallback: &Path,
    path_var: Option<&OsStr>,
) -> Result<PathBuf, ResolveError> {
    if let Some(found) = find_executable(preferred, path_var) {
        info!(binary = %found.display(), "using media-status binary");
        return Ok(found);
    }

    if is_executable(fallback) {
        warn!(
            preferred = %preferred.display(),
            fallback = %fallback.display(),
            "preferred binary not found; using fallback"
        );
        return Ok(fallback.to_path_buf());
    }

    Err(ResolveError {
        preferred: preferred.to_path_buf(),
        fallback: fallback.to_path_buf(),
    })
}

fn find_executable(candidate: &Path, path_var: Option<&OsStr>) -> Option<PathBuf> {
    if candidate.components().count() > 1 || candidate.is_absolute() {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    env::split_paths(path_var?)
        .map(|dir| dir.join(candidate))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str, mode: u32) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(mode)).unwrap();
        path
    }

    #[test]
    fn test_bare_name_is_found_on_path() {
        let dir = TempDir::new().unwrap();
        let expected = touch(dir.path(), "nowplaying-cli", 0o755);

        let found = resolve_binary_in(
            Path::new("nowplaying-cli"),
            Path::new("/nonexistent/fallback"),
            Some(dir.path().as_os_str()),
        );

        assert_eq!(found, Ok(expected));
    }

    #[test]
    fn test_explicit_path_is_used_directly() {
        let dir = TempDir::new().unwrap();
        let expected = touch(dir.path(), "custom", 0o755);

        let found = resolve_binary_in(&expected, Path::new("/nonexistent/fallback"), None);

        assert_eq!(found, Ok(expected));
    }

    #[test]
    fn test_non_executable_file_falls_back() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "nowplaying-cli", 0o644);
        let fallback = touch(dir.path(), "bundled", 0o755);

        let found = resolve_binary_in(
            Path::new("nowplaying-cli"),
            &fallback,
            Some(dir.path().as_os_str()),
        );

        assert_eq!(found, Ok(fallback));
    }

    #[test]
    fn test_missing_path_variable_falls_back() {
        let dir = TempDir::new().unwrap();
        let fallback = touch(dir.path(), "bundled", 0o755);

        let found = resolve_binary_in(Path::new("nowplaying-cli"), &fallback, None);

        assert_eq!(found, Ok(fallback));
    }

    #[test]
    fn test_no_candidate_is_an_error_naming_both() {
        let dir = TempDir::new().unwrap();
        let fallback = dir.path().join("bundled");

        let err = resolve_binary_in(
            Path::new("nowplaying-cli"),
            &fallback,
            Some(dir.path().as_os_str()),
        )
        .unwrap_err();

        assert_eq!(err.preferred, PathBuf::from("nowplaying-cli"));
        assert!(err.to_string().contains("nowplaying-cli"));
        assert!(err.to_string().contains("bundled"));
    }

    #[test]
    fn test_directory_is_not_executable() {
        let dir = TempDir::new().unwrap();
        assert!(!is_executable(dir.path()));
    }
}
