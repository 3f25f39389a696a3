use std::fs;
use std::path::{Path, PathBuf};

use super::ScorecardConfig;
use crate::errors::ScorecardError;

pub const CONFIG_FILE_NAME: &str = ".scorecard.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<ScorecardConfig, ScorecardError> {
    let config = toml::from_str::<ScorecardConfig>(contents)
        .map_err(|e| ScorecardError::config(format!("Failed to parse {CONFIG_FILE_NAME}: {e}")))?;

    if let Some(name) = config.defaults.as_ref().and_then(|d| d.preset.as_deref()) {
        if super::Preset::parse(name).is_none() {
            log::warn!(
                "Configured preset '{}' is unknown; sessions will start from default values",
                name
            );
        }
    }

    Ok(config)
}

/// Try loading config from a specific file; `None` when absent or invalid.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<ScorecardConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            // Only log actual errors, not "file not found"
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file.
pub fn load_config_from(start: PathBuf) -> ScorecardConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ScorecardConfig::default()
        })
}

/// Load config from the current directory hierarchy, or defaults.
pub fn load_config() -> ScorecardConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            ScorecardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::image::Theme;
    use indoc::indoc;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [defaults]
            preset = "advanced"

            [display]
            theme = "dark"
            color = "never"
            emoji = "always"

            [export]
            output_dir = "exports"
        "#})
        .unwrap();

        assert_eq!(config.theme(), Theme::Dark);
        assert_eq!(config.output_dir(), PathBuf::from("exports"));
        assert_eq!(
            config.starting_values(),
            super::super::Preset::Advanced.values()
        );
    }

    #[test]
    fn test_parse_rejects_bad_theme() {
        let result = parse_and_validate_config("[display]\ntheme = \"sepia\"\n");
        assert!(matches!(result, Err(ScorecardError::Config(_))));
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(
            parse_and_validate_config("").unwrap(),
            ScorecardConfig::default()
        );
    }

    #[test]
    fn test_load_config_from_ancestor() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[display]\ntheme = \"dark\"\n",
        )
        .unwrap();
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let config = load_config_from(nested);
        assert_eq!(config.theme(), Theme::Dark);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "not = [valid").unwrap();
        assert!(try_load_config_from_path(&temp.path().join(CONFIG_FILE_NAME)).is_none());
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }
}
