//! Local filesystem session source

use council_application::{SessionSource, SourceError};
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads session documents from the local filesystem as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSessionSource;

impl LocalSessionSource {
    pub fn new() -> Self {
        Self
    }
}

impl SessionSource for LocalSessionSource {
    fn exists(&self, location: &Path) -> bool {
        location.is_file()
    }

    fn read(&self, location: &Path) -> Result<String, SourceError> {
        debug!("Reading session file {}", location.display());
        std::fs::read_to_string(location).map_err(|source| match source.kind() {
            ErrorKind::NotFound => SourceError::NotFound(location.to_path_buf()),
            _ => SourceError::Read {
                path: location.to_path_buf(),
                source,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.md");
        fs::write(&path, "## Topic: hello\n").unwrap();

        let source = LocalSessionSource::new();
        assert!(source.exists(&path));
        assert_eq!(source.read(&path).unwrap(), "## Topic: hello\n");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let source = LocalSessionSource::new();
        assert!(!source.exists(&path));
        assert!(source.read(&path).unwrap_err().is_not_found());
    }

    #[test]
    fn test_directory_is_not_a_session() {
        let dir = TempDir::new().unwrap();
        assert!(!LocalSessionSource::new().exists(dir.path()));
    }

    #[test]
    fn test_invalid_utf8_is_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("binary.md");
        fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        let error = LocalSessionSource::new().read(&path).unwrap_err();
        assert!(matches!(error, SourceError::Read { .. }));
    }
}
