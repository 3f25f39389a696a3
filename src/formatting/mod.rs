//! Terminal color and emoji handling for scorecard output.

use colored::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::io::IsTerminal;

use crate::scoring::ColorKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    #[default]
    Auto, // Use emoji if terminal supports Unicode
    Always,
    Never,
}

impl EmojiMode {
    pub fn should_use_emoji(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    pub emoji: EmojiMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode, emoji: EmojiMode) -> Self {
        Self { color, emoji }
    }

    /// Apply `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        // NO_COLOR per no-color.org
        if env::var("NO_COLOR").is_ok() {
            self.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                self.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                self.color = ColorMode::Always;
            }
        }

        self
    }

    /// ASCII-only, no colors, no emoji
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            emoji: EmojiMode::Never,
        }
    }
}

/// Applies a [`FormattingConfig`] to text fragments.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    use_color: bool,
    use_emoji: bool,
}

impl Formatter {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            use_color: config.color.should_use_color(),
            use_emoji: config.emoji.should_use_emoji(),
        }
    }

    pub fn uses_emoji(&self) -> bool {
        self.use_emoji
    }

    /// Emoji with a trailing space, or the fallback when emoji are off.
    pub fn emoji(&self, emoji: &str, fallback: &str) -> String {
        if self.use_emoji {
            format!("{emoji} ")
        } else {
            fallback.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        if self.use_color {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color text with a tier's severity color.
    pub fn severity(&self, text: &str, key: ColorKey) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match key {
            ColorKey::Green => text.green().to_string(),
            ColorKey::Yellow => text.yellow().to_string(),
            ColorKey::Red => text.red().to_string(),
        }
    }
}

fn detect_terminal() -> bool {
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
