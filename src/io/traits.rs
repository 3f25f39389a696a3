//! I/O seams for the export actions.
//!
//! The scorecard core only produces text and bytes. Handing them to the
//! clipboard or to a download location goes through these traits so the
//! session can be driven against in-memory implementations in tests.

use crate::errors::ScorecardError;

/// Receives summary text for the copy action.
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::Clipboard` when no clipboard is available
    /// (SSH sessions, headless environments) or the write is rejected.
    fn set_text(&mut self, text: &str) -> Result<(), ScorecardError>;
}

/// Receives exported files for the download action.
pub trait ArtifactSink {
    /// Store `bytes` under `file_name` and return where they went.
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::Io` if the destination cannot be written.
    fn save(&mut self, file_name: &str, bytes: &[u8]) -> Result<String, ScorecardError>;
}
