//! Error types for scorecard operations.
//!
//! The scoring and insight functions are total over a sanitised
//! [`Assessment`](crate::core::Assessment) and never fail. Errors only come
//! from the edges: rasterising and encoding export artifacts, writing files,
//! talking to the clipboard, loading configuration and parsing summaries
//! back into an assessment.
//!
//! # Example
//!
//! ```rust
//! use scorecard::errors::ScorecardError;
//!
//! let err = ScorecardError::parse("missing line for Volume");
//! assert_eq!(err.to_string(), "Parse error: missing line for Volume");
//! ```

use std::path::PathBuf;

/// Unified error type for scorecard operations.
#[derive(Debug, thiserror::Error)]
pub enum ScorecardError {
    /// The SVG layout could not be turned into a raster.
    #[error("Render error: {0}")]
    Render(String),

    /// The raster could not be encoded as an image file.
    #[error("Encode error: {0}")]
    Encode(String),

    /// File system failure while writing an artifact.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Clipboard service unavailable or rejected the write. Carries the
    /// full status text.
    #[error("{0}")]
    Clipboard(String),

    /// Configuration file problems.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A summary text could not be read back into an assessment.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ScorecardError {
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    pub fn encode(message: impl Into<String>) -> Self {
        Self::Encode(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The clipboard accepted the connection but rejected the write.
    pub fn clipboard(message: impl std::fmt::Display) -> Self {
        Self::Clipboard(format!("Clipboard write failed: {message}"))
    }

    pub fn clipboard_unavailable(reason: impl std::fmt::Display) -> Self {
        Self::Clipboard(format!("Clipboard not available: {reason}"))
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
