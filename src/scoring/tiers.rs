//! Tier classification for dimension values and the aggregate.
//!
//! The same thresholds apply to every value on the 0-10 scale, so a
//! dimension and the overall score read the same way in the live view and in
//! exported artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest value counted as `Strong` (70% of the scale).
pub const STRONG_MIN: f64 = 7.0;
/// Lowest value counted as `Developing` (40% of the scale).
pub const DEVELOPING_MIN: f64 = 4.0;

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    /// Below 40% of the scale
    Untapped,
    /// From 40% up to (not including) 70%
    Developing,
    /// 70% of the scale and above
    Strong,
}

impl Tier {
    /// Get tier label for display
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Strong => "Strong",
            Tier::Developing => "Developing",
            Tier::Untapped => "Untapped",
        }
    }

    /// Severity color shared by every rendering of this tier
    pub fn color_key(&self) -> ColorKey {
        match self {
            Tier::Strong => ColorKey::Green,
            Tier::Developing => ColorKey::Yellow,
            Tier::Untapped => ColorKey::Red,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Display-severity token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorKey {
    Green,
    Yellow,
    Red,
}

impl ColorKey {
    /// RGB triple used for image fills.
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            ColorKey::Green => [0x22, 0xc5, 0x5e],
            ColorKey::Yellow => [0xea, 0xb3, 0x08],
            ColorKey::Red => [0xef, 0x44, 0x44],
        }
    }

    /// `#rrggbb` form of [`ColorKey::rgb`].
    pub fn hex(&self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorKey::Green => "green",
            ColorKey::Yellow => "yellow",
            ColorKey::Red => "red",
        }
    }
}

/// Classify a value on the 0-10 scale.
pub fn tier_for(value: f64) -> Tier {
    if value >= STRONG_MIN {
        Tier::Strong
    } else if value >= DEVELOPING_MIN {
        Tier::Developing
    } else {
        Tier::Untapped
    }
}

/// Severity color for a value on the 0-10 scale.
pub fn color_key_for(value: f64) -> ColorKey {
    tier_for(value).color_key()
}
