//! Destinations for exported artifacts.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use super::traits::ArtifactSink;
use crate::errors::ScorecardError;

/// Writes artifacts into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectoryDestination {
    dir: PathBuf,
}

impl DirectoryDestination {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectoryDestination {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, ScorecardError> {
        super::ensure_dir(&self.dir)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(|e| ScorecardError::io(&path, e))?;
        log::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
        Ok(path.display().to_string())
    }
}

/// Keeps artifacts in memory, keyed by file name.
#[derive(Debug, Default, Clone)]
pub struct MemoryDestination {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryDestination {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, file_name: &str) -> Option<&[u8]> {
        self.files.get(file_name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactSink for MemoryDestination {
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, ScorecardError> {
        self.files.insert(file_name.to_string(), bytes.to_vec());
        Ok(format!("memory:{file_name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_destination_creates_nested_dirs() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("exports").join("today");
        let mut dest = DirectoryDestination::new(&nested);

        let location = dest.save("ai-scorecard.png", b"png").unwrap();
        assert!(location.ends_with("ai-scorecard.png"));
        assert_eq!(fs::read(nested.join("ai-scorecard.png")).unwrap(), b"png");
    }

    #[test]
    fn test_directory_destination_reports_io_errors() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file where the directory should be.
        let mut dest = DirectoryDestination::new(&blocker);
        assert!(matches!(
            dest.save("ai-scorecard.png", b"png"),
            Err(ScorecardError::Io { .. })
        ));
    }

    #[test]
    fn test_memory_destination() {
        let mut dest = MemoryDestination::new();
        assert!(dest.is_empty());
        dest.save("a.png", &[1, 2, 3]).unwrap();
        assert_eq!(dest.get("a.png"), Some(&[1u8, 2, 3][..]));
        assert_eq!(dest.len(), 1);
    }
}
