//! Named value presets for bulk updates.
//!
//! - **Beginner**: occasional, single-domain use
//! - **Intermediate**: regular use with some structure
//! - **Advanced**: heavy, systematic, multi-domain use
//! - **Benchmark**: the reference profile a fresh session starts from
//! - **Reset**: every dimension back to the midpoint
//!
//! # Example
//!
//! ```rust
//! use scorecard::config::presets::{resolve_preset, Preset};
//!
//! assert_eq!(Preset::parse("Advanced"), Some(Preset::Advanced));
//! // Unknown names fall back to the all-5s default.
//! assert_eq!(resolve_preset("expert"), [5.0; 5]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_VALUE, DIMENSION_COUNT};

/// Values used for `reset` and for unrecognised preset names.
pub const DEFAULT_VALUES: [f64; DIMENSION_COUNT] = [DEFAULT_VALUE; DIMENSION_COUNT];

/// Reference profile: heavy, deep, multi-domain use with little
/// systemization and almost no creative production.
pub const BENCHMARK_VALUES: [f64; DIMENSION_COUNT] = [9.0, 8.5, 9.0, 5.0, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Beginner,
    Intermediate,
    Advanced,
    Benchmark,
    Reset,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Beginner,
        Preset::Intermediate,
        Preset::Advanced,
        Preset::Benchmark,
        Preset::Reset,
    ];

    /// Values in canonical dimension order.
    pub fn values(self) -> [f64; DIMENSION_COUNT] {
        match self {
            Preset::Beginner => [3.0, 2.0, 2.5, 1.0, 1.0],
            Preset::Intermediate => [6.0, 5.5, 5.0, 4.0, 3.5],
            Preset::Advanced => [9.0, 8.5, 8.5, 8.0, 7.0],
            Preset::Benchmark => BENCHMARK_VALUES,
            Preset::Reset => DEFAULT_VALUES,
        }
    }

    /// Parse preset from string name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(Preset::Beginner),
            "intermediate" => Some(Preset::Intermediate),
            "advanced" => Some(Preset::Advanced),
            "benchmark" | "reference" => Some(Preset::Benchmark),
            "reset" => Some(Preset::Reset),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Beginner => "beginner",
            Preset::Intermediate => "intermediate",
            Preset::Advanced => "advanced",
            Preset::Benchmark => "benchmark",
            Preset::Reset => "reset",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::parse(s).ok_or_else(|| {
            format!(
                "Invalid preset: '{}'. Valid options: beginner, intermediate, advanced, benchmark, reset",
                s
            )
        })
    }
}

/// Resolve a preset name to its values, failing soft to [`DEFAULT_VALUES`].
pub fn resolve_preset(name: &str) -> [f64; DIMENSION_COUNT] {
    match Preset::parse(name) {
        Some(preset) => preset.values(),
        None => {
            log::warn!("Unknown preset '{}'. Using default values.", name);
            DEFAULT_VALUES
        }
    }
}
