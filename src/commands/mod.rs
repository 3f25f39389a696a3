//! CLI command implementations.
//!
//! Available commands:
//! - **show**: render the scorecard in the terminal, as JSON or as text
//! - **summary**: print the text summary and optionally copy it
//! - **export**: write the PNG image (live or blank template)
//! - **presets**: list the preset vocabulary
//! - **init**: write a default `.scorecard.toml`
//!
//! Commands build a [`ScorecardSession`] from configuration plus the value
//! arguments, then drive it like the interactive widget would.

pub mod export;
pub mod init;
pub mod presets;
pub mod show;
pub mod summary;

use anyhow::{Context, Result};
use std::fs;

use crate::cli::{ThemeArg, ValueArgs};
use crate::config::ScorecardConfig;
use crate::core::{sanitize_value, Dimension};
use crate::output::image::Theme;
use crate::output::summary::parse_summary;
use crate::session::ScorecardSession;

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

impl ValueArgs {
    /// Per-dimension overrides in canonical order.
    pub fn overrides(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        [
            (Dimension::Volume, self.volume),
            (Dimension::Breadth, self.breadth),
            (Dimension::Depth, self.depth),
            (Dimension::Systemization, self.systemization),
            (Dimension::Creative, self.creative),
        ]
        .into_iter()
        .filter_map(|(dimension, value)| value.map(|v| (dimension, v)))
    }
}

/// Build the session a command operates on.
///
/// Starting values come from the summary file, the preset argument, or the
/// configuration, in that order; single-dimension flags apply next and
/// `--set KEY=VALUE` pairs last.
pub fn build_session(config: &ScorecardConfig, values: &ValueArgs) -> Result<ScorecardSession> {
    let mut session = ScorecardSession::from_config(config);

    if let Some(path) = &values.from_summary {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read summary file {}", path.display()))?;
        let assessment = parse_summary(&text)
            .with_context(|| format!("Failed to parse summary file {}", path.display()))?;
        session = ScorecardSession::new(assessment).with_theme(session.theme());
    } else if let Some(name) = &values.preset {
        session.apply_preset(name);
    }

    for (dimension, value) in values.overrides() {
        session.set_value(dimension, value);
        warn_if_adjusted(dimension.label(), value);
    }
    for (key, value) in &values.set {
        session
            .set_value_by_key(key, *value)
            .with_context(|| format!("Invalid --set {key}={value}"))?;
        warn_if_adjusted(key, *value);
    }

    Ok(session)
}

fn warn_if_adjusted(name: &str, requested: f64) {
    let stored = sanitize_value(requested);
    if stored != requested {
        log::warn!(
            "{} value {} adjusted to {} (scores are 0-10 in steps of 0.5)",
            name,
            requested,
            stored
        );
    }
}
