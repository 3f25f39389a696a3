//! Clipboard implementations.
//!
//! `SystemClipboard` talks to the platform clipboard through arboard; it is
//! opened per write so a missing clipboard only fails the copy action.

use super::traits::ClipboardSink;
use crate::errors::ScorecardError;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    /// Whether a write keeps serving the text until another application
    /// takes over the selection.
    ///
    /// X11 and Wayland drop the contents when the owning process exits, so
    /// on Linux a write blocks until a clipboard manager (or the next copy)
    /// owns the selection.
    pub const fn holds_selection() -> bool {
        cfg!(target_os = "linux")
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ScorecardError> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(ScorecardError::clipboard_unavailable)?;
        write_text(&mut clipboard, text).map_err(ScorecardError::clipboard)
    }
}

#[cfg(target_os = "linux")]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;

    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn write_text(clipboard: &mut arboard::Clipboard, text: &str) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// In-memory clipboard that records the last text written.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ScorecardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails, standing in for headless environments.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableClipboard;

impl ClipboardSink for UnavailableClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ScorecardError> {
        Err(ScorecardError::clipboard_unavailable("no display"))
    }
}
