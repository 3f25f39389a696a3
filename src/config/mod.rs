//! Configuration for the scorecard: starting preset, display and export
//! settings, loaded from `.scorecard.toml`.

mod loader;
pub mod presets;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::formatting::{ColorMode, EmojiMode, FormattingConfig};
use crate::output::image::Theme;

pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};
pub use presets::{resolve_preset, Preset, BENCHMARK_VALUES, DEFAULT_VALUES};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScorecardConfig {
    #[serde(default)]
    pub defaults: Option<DefaultsConfig>,
    #[serde(default)]
    pub display: Option<DisplayConfig>,
    #[serde(default)]
    pub export: Option<ExportConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Preset a fresh session starts from
    #[serde(default)]
    pub preset: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub theme: Option<Theme>,
    #[serde(default)]
    pub color: Option<ColorMode>,
    #[serde(default)]
    pub emoji: Option<EmojiMode>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl ScorecardConfig {
    /// Values a fresh session starts from.
    ///
    /// Without a configured preset this is the reference benchmark.
    pub fn starting_values(&self) -> [f64; crate::core::DIMENSION_COUNT] {
        self.defaults
            .as_ref()
            .and_then(|d| d.preset.as_deref())
            .map(resolve_preset)
            .unwrap_or(BENCHMARK_VALUES)
    }

    pub fn theme(&self) -> Theme {
        self.display
            .as_ref()
            .and_then(|d| d.theme)
            .unwrap_or_default()
    }

    pub fn formatting(&self) -> FormattingConfig {
        let display = self.display.clone().unwrap_or_default();
        FormattingConfig::new(
            display.color.unwrap_or_default(),
            display.emoji.unwrap_or_default(),
        )
    }

    pub fn output_dir(&self) -> PathBuf {
        self.export
            .as_ref()
            .and_then(|e| e.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_starts_from_benchmark() {
        let config = ScorecardConfig::default();
        assert_eq!(config.starting_values(), BENCHMARK_VALUES);
        assert_eq!(config.theme(), Theme::Light);
        assert_eq!(config.output_dir(), PathBuf::from("."));
        assert_eq!(config.formatting(), FormattingConfig::default());
    }

    #[test]
    fn test_configured_preset_wins() {
        let config = ScorecardConfig {
            defaults: Some(DefaultsConfig {
                preset: Some("beginner".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(config.starting_values(), Preset::Beginner.values());
    }

    #[test]
    fn test_unknown_configured_preset_falls_back_to_defaults() {
        let config = ScorecardConfig {
            defaults: Some(DefaultsConfig {
                preset: Some("wizard".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(config.starting_values(), DEFAULT_VALUES);
    }
}
