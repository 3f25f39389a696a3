pub mod clipboard;
pub mod destinations;
pub mod traits;

pub use clipboard::{MemoryClipboard, SystemClipboard, UnavailableClipboard};
pub use destinations::{DirectoryDestination, MemoryDestination};
pub use traits::{ArtifactSink, ClipboardSink};

use std::fs;
use std::path::Path;

use crate::errors::ScorecardError;

pub fn write_file(path: &Path, content: &str) -> Result<(), ScorecardError> {
    fs::write(path, content).map_err(|e| ScorecardError::io(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<(), ScorecardError> {
    if !path.exists() {
        fs::create_dir_all(path).map_err(|e| ScorecardError::io(path, e))?;
    }
    Ok(())
}
