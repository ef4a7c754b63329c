//! Path utilities

use std::io;
use std::path::{Path, PathBuf};

/// Expand tilde (~) in path to home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix('~') {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped.trim_start_matches('/'));
        }
    }
    PathBuf::from(path)
}

/// Normalize a path (expand tilde, resolve relative paths against the working directory)
pub fn normalize_path(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(expanded)
    }
}

/// Read a UTF-8 file, rejecting directories
pub fn read_file(path: &Path) -> io::Result<String> {
    if path.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Not a file: {}", path.display()),
        ));
    }
    std::fs::read_to_string(path)
}

/// Write file content, replacing what was there
pub fn write_file(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/translations");
        assert!(!path.to_string_lossy().starts_with('~'));
    }

    #[test]
    fn test_normalize_absolute_path() {
        let path = normalize_path("/srv/lang");
        assert_eq!(path, PathBuf::from("/srv/lang"));
    }

    #[test]
    fn test_normalize_relative_path() {
        let path = normalize_path("res/common");
        assert!(path.is_absolute());
        assert!(path.ends_with("res/common"));
    }

    #[test]
    fn test_read_rejects_directory() {
        let dir = tempdir().unwrap();
        assert!(read_file(dir.path()).is_err());
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("stf.en.json");
        write_file(&file, "{}").unwrap();
        assert_eq!(read_file(&file).unwrap(), "{}");
    }
}
