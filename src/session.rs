//! In-memory scorecard session.
//!
//! A session owns the single live [`Assessment`]. Every mutation goes
//! through the clamping input boundary and returns the freshly recomputed
//! snapshot, so callers never observe stale derived state. Export actions
//! read the live assessment and never change it, whatever their outcome.

use serde::Serialize;

use crate::config::{resolve_preset, ScorecardConfig};
use crate::core::{Assessment, Dimension};
use crate::errors::ScorecardError;
use crate::insights::{recompute, Insight};
use crate::io::{ArtifactSink, ClipboardSink};
use crate::output::image::{to_image_artifact_with, ImageOptions, Theme};
use crate::output::summary::to_summary_text_with;

/// Assessment plus everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardSnapshot {
    pub assessment: Assessment,
    pub aggregate: f64,
    pub insight: Insight,
}

impl ScorecardSnapshot {
    pub fn from_assessment(assessment: Assessment) -> Self {
        let (aggregate, insight) = recompute(&assessment);
        Self {
            assessment,
            aggregate,
            insight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScorecardSession {
    assessment: Assessment,
    theme: Theme,
    emoji: bool,
    status: Option<String>,
}

impl ScorecardSession {
    pub fn new(assessment: Assessment) -> Self {
        Self {
            assessment,
            theme: Theme::default(),
            emoji: true,
            status: None,
        }
    }

    /// Start from the configured preset (or the reference benchmark).
    pub fn from_config(config: &ScorecardConfig) -> Self {
        let mut session = Self::new(Assessment::new(config.starting_values()));
        session.theme = config.theme();
        session
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Whether copied summaries carry emoji markers.
    pub fn with_emoji(mut self, emoji: bool) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Last transient status message from an export action.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn snapshot(&self) -> ScorecardSnapshot {
        ScorecardSnapshot::from_assessment(self.assessment)
    }

    /// Set one dimension (clamped to the score domain) and recompute.
    pub fn set_value(&mut self, dimension: Dimension, value: f64) -> ScorecardSnapshot {
        self.assessment.set_value(dimension, value);
        self.snapshot()
    }

    /// Set one dimension by its key (`"volume"`, `"creative"`, ...).
    ///
    /// # Errors
    ///
    /// Returns `ScorecardError::Parse` for a key that names no dimension;
    /// the assessment is left unchanged.
    pub fn set_value_by_key(
        &mut self,
        key: &str,
        value: f64,
    ) -> Result<ScorecardSnapshot, ScorecardError> {
        let dimension = Dimension::from_key(key).ok_or_else(|| {
            let keys: Vec<_> = Dimension::ALL.iter().map(|d| d.key()).collect();
            ScorecardError::parse(format!(
                "Unknown dimension '{}'. Valid keys: {}",
                key,
                keys.join(", ")
            ))
        })?;
        Ok(self.set_value(dimension, value))
    }

    /// Replace all values with a named preset and recompute.
    ///
    /// Unknown names fall back to the all-5s default.
    pub fn apply_preset(&mut self, name: &str) -> ScorecardSnapshot {
        self.assessment.set_all(resolve_preset(name));
        self.snapshot()
    }

    /// Copy the summary text to `clipboard` and return the status message.
    pub fn copy_summary(&mut self, clipboard: &mut dyn ClipboardSink) -> String {
        let snapshot = self.snapshot();
        let text = to_summary_text_with(
            &snapshot.assessment,
            snapshot.aggregate,
            &snapshot.insight,
            self.emoji,
        );

        let message = match clipboard.set_text(&text) {
            Ok(()) => "Copied summary to clipboard".to_string(),
            Err(e) => {
                log::warn!("Copy failed: {}", e);
                e.to_string()
            }
        };
        self.status = Some(message.clone());
        message
    }

    /// Render the live (or blank) image and hand it to `sink`.
    ///
    /// Returns the status message; failures are reported, never raised.
    pub fn export_image(&mut self, blank: bool, sink: &mut dyn ArtifactSink) -> String {
        let _span = tracing::debug_span!("export_image", blank).entered();
        let snapshot = self.snapshot();
        let options = ImageOptions {
            blank,
            theme: self.theme,
        };

        let outcome = to_image_artifact_with(
            &snapshot.assessment,
            snapshot.aggregate,
            &snapshot.insight,
            &options,
        )
        .and_then(|artifact| {
            sink.save(artifact.file_name, &artifact.png)
                .map(|location| (artifact.file_name, location))
        });

        let message = match outcome {
            Ok((file_name, location)) => {
                log::debug!("Exported {} to {}", file_name, location);
                format!("Saved {file_name}")
            }
            Err(e) => {
                log::warn!("Export failed: {}", e);
                format!("Export failed: {e}")
            }
        };
        self.status = Some(message.clone());
        message
    }
}

impl Default for ScorecardSession {
    fn default() -> Self {
        Self::from_config(&ScorecardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BENCHMARK_VALUES, DEFAULT_VALUES};
    use crate::io::{MemoryClipboard, UnavailableClipboard};

    struct FailingSink;

    impl ArtifactSink for FailingSink {
        fn save(&mut self, _file_name: &str, _bytes: &[u8]) -> Result<String, ScorecardError> {
            Err(ScorecardError::io(
                "/readonly",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }
    }

    #[test]
    fn test_default_session_starts_at_benchmark() {
        let session = ScorecardSession::default();
        assert_eq!(session.assessment().values(), BENCHMARK_VALUES);
        assert_eq!(session.snapshot().aggregate, 6.7);
    }

    #[test]
    fn test_set_value_recomputes() {
        let mut session = ScorecardSession::default();
        let snapshot = session.set_value(Dimension::Creative, 9.0);
        assert_eq!(snapshot.assessment.get(Dimension::Creative), 9.0);
        assert_eq!(snapshot.aggregate, 8.1);
        assert_eq!(snapshot.insight.maturity_level.label(), "Advanced User");
    }

    #[test]
    fn test_set_value_clamps_out_of_range() {
        let mut session = ScorecardSession::default();
        let snapshot = session.set_value(Dimension::Volume, 42.0);
        assert_eq!(snapshot.assessment.get(Dimension::Volume), 10.0);
        let snapshot = session.set_value(Dimension::Volume, -1.0);
        assert_eq!(snapshot.assessment.get(Dimension::Volume), 0.0);
    }

    #[test]
    fn test_set_value_by_key() {
        let mut session = ScorecardSession::default();
        let snapshot = session.set_value_by_key("Systemization", 8.0).unwrap();
        assert_eq!(snapshot.assessment.get(Dimension::Systemization), 8.0);

        let before = *session.assessment();
        let err = session.set_value_by_key("speed", 3.0).unwrap_err();
        assert!(err.to_string().contains("Unknown dimension 'speed'"));
        assert_eq!(*session.assessment(), before);
    }

    #[test]
    fn test_apply_unknown_preset_falls_back() {
        let mut session = ScorecardSession::default();
        let snapshot = session.apply_preset("grandmaster");
        assert_eq!(snapshot.assessment.values(), DEFAULT_VALUES);
        assert_eq!(snapshot.aggregate, 5.0);
    }

    #[test]
    fn test_copy_summary_status() {
        let mut session = ScorecardSession::default().with_emoji(false);
        let mut clipboard = MemoryClipboard::new();

        let message = session.copy_summary(&mut clipboard);
        assert_eq!(message, "Copied summary to clipboard");
        assert_eq!(session.status(), Some("Copied summary to clipboard"));
        assert!(clipboard
            .contents()
            .unwrap()
            .starts_with("AI Usage Scorecard\nVolume: 9/10 (Strong)\n"));
    }

    #[test]
    fn test_copy_failure_keeps_state() {
        let mut session = ScorecardSession::default();
        let before = *session.assessment();

        let message = session.copy_summary(&mut UnavailableClipboard);
        assert_eq!(message, "Clipboard not available: no display");
        assert_eq!(*session.assessment(), before);
    }

    #[test]
    fn test_export_failure_keeps_state() {
        let mut session = ScorecardSession::default();
        let before = *session.assessment();

        let message = session.export_image(false, &mut FailingSink);
        assert!(message.starts_with("Export failed"));
        assert_eq!(*session.assessment(), before);
        session.clear_status();
        assert_eq!(session.status(), None);
    }
}
