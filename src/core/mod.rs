//! Scorecard data model: the five fixed dimensions and the assessment that
//! holds one score per dimension.
//!
//! Values entering an [`Assessment`] always pass through [`sanitize_value`],
//! so everything downstream can assume scores in `[0, 10]` at 0.5 steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest score a dimension can hold.
pub const MIN_SCORE: f64 = 0.0;
/// Highest score a dimension can hold.
pub const MAX_SCORE: f64 = 10.0;
/// Slider granularity.
pub const SCORE_STEP: f64 = 0.5;
/// Number of rated dimensions.
pub const DIMENSION_COUNT: usize = 5;

/// Value every dimension takes when no usable preset is given.
pub const DEFAULT_VALUE: f64 = 5.0;

/// One of the five rated capability axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Volume,
    Breadth,
    Depth,
    Systemization,
    Creative,
}

impl Dimension {
    /// All dimensions in canonical order.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Volume,
        Dimension::Breadth,
        Dimension::Depth,
        Dimension::Systemization,
        Dimension::Creative,
    ];

    /// Position in canonical order.
    pub fn index(self) -> usize {
        match self {
            Dimension::Volume => 0,
            Dimension::Breadth => 1,
            Dimension::Depth => 2,
            Dimension::Systemization => 3,
            Dimension::Creative => 4,
        }
    }

    /// Stable identifier.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Volume => "volume",
            Dimension::Breadth => "breadth",
            Dimension::Depth => "depth",
            Dimension::Systemization => "systemization",
            Dimension::Creative => "creative",
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Volume => "Volume",
            Dimension::Breadth => "Breadth",
            Dimension::Depth => "Depth",
            Dimension::Systemization => "Systemization",
            Dimension::Creative => "Creative Production",
        }
    }

    /// The question shown next to the slider.
    pub fn hint(self) -> &'static str {
        match self {
            Dimension::Volume => "How often do you use AI?",
            Dimension::Breadth => "How many domains (content, strategy, ops, R&D)?",
            Dimension::Depth => "How iterative/strategic (rounds, frameworks, synthesis)?",
            Dimension::Systemization => "Templates, workflows, dashboards, automations.",
            Dimension::Creative => "Visuals, audio, video, design assets.",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Dimension::Volume => "Daily usage frequency, from occasional to constant integration",
            Dimension::Breadth => "Scope across different work areas and use cases",
            Dimension::Depth => "Sophistication of workflows and multi-step processes",
            Dimension::Systemization => "Organized processes, templates, and automated workflows",
            Dimension::Creative => "Using AI for multimedia content and creative assets",
        }
    }

    /// Parse from the key, case-insensitively.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim().to_lowercase();
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Parse from the display label, case-insensitively.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Bring an arbitrary input onto the score domain.
///
/// Clamps to `[0, 10]` and snaps to the nearest 0.5. NaN maps to 0 so a
/// malformed input can never reach the scoring engine.
pub fn sanitize_value(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_SCORE;
    }
    let clamped = value.clamp(MIN_SCORE, MAX_SCORE);
    // Adding 0.0 turns -0.0 into 0.0 so it never prints as "-0".
    (clamped / SCORE_STEP).round() * SCORE_STEP + 0.0
}

/// One rated capability axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    value: f64,
}

impl DimensionScore {
    pub fn new(dimension: Dimension, value: f64) -> Self {
        Self {
            dimension,
            value: sanitize_value(value),
        }
    }

    pub fn key(&self) -> &'static str {
        self.dimension.key()
    }

    pub fn label(&self) -> &'static str {
        self.dimension.label()
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}

/// The full current state: exactly one score per dimension, stored in
/// canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    scores: [DimensionScore; DIMENSION_COUNT],
}

impl Assessment {
    /// Build from values in canonical order (volume, breadth, depth,
    /// systemization, creative). Each value is sanitised.
    pub fn new(values: [f64; DIMENSION_COUNT]) -> Self {
        let scores = Dimension::ALL.map(|d| DimensionScore::new(d, values[d.index()]));
        Self { scores }
    }

    /// All five dimensions at zero, used for blank templates.
    pub fn zeroed() -> Self {
        Self::new([MIN_SCORE; DIMENSION_COUNT])
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.scores[dimension.index()].value
    }

    /// Set one dimension through the input boundary and return the value
    /// actually stored.
    pub fn set_value(&mut self, dimension: Dimension, value: f64) -> f64 {
        let score = DimensionScore::new(dimension, value);
        if score.value != value {
            log::debug!(
                "Adjusted {} input {} to {}",
                dimension.key(),
                value,
                score.value
            );
        }
        self.scores[dimension.index()] = score;
        score.value
    }

    /// Replace all five values at once.
    pub fn set_all(&mut self, values: [f64; DIMENSION_COUNT]) {
        *self = Self::new(values);
    }

    pub fn values(&self) -> [f64; DIMENSION_COUNT] {
        self.scores.map(|s| s.value)
    }

    /// Scores in canonical order.
    pub fn scores(&self) -> &[DimensionScore] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = &DimensionScore> {
        self.scores.iter()
    }
}

impl Default for Assessment {
    fn default() -> Self {
        Self::new([DEFAULT_VALUE; DIMENSION_COUNT])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_matches_index() {
        for (i, dimension) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dimension.index(), i);
        }
    }

    #[test]
    fn test_dimension_parsing() {
        assert_eq!(Dimension::from_key("volume"), Some(Dimension::Volume));
        assert_eq!(Dimension::from_key(" Creative "), Some(Dimension::Creative));
        assert_eq!(Dimension::from_key("creativity"), None);
        assert_eq!(
            Dimension::from_label("creative production"),
            Some(Dimension::Creative)
        );
        assert_eq!(
            Dimension::from_label("Systemization"),
            Some(Dimension::Systemization)
        );
    }

    #[test]
    fn test_sanitize_value_clamps_and_snaps() {
        assert_eq!(sanitize_value(-3.0), 0.0);
        assert_eq!(sanitize_value(12.5), 10.0);
        assert_eq!(sanitize_value(f64::INFINITY), 10.0);
        assert_eq!(sanitize_value(f64::NEG_INFINITY), 0.0);
        assert_eq!(sanitize_value(f64::NAN), 0.0);
        assert_eq!(sanitize_value(7.3), 7.5);
        assert_eq!(sanitize_value(7.2), 7.0);
        assert_eq!(sanitize_value(8.5), 8.5);
        assert!(sanitize_value(-0.0).is_sign_positive());
    }

    #[test]
    fn test_set_value_returns_stored_value() {
        let mut assessment = Assessment::default();
        assert_eq!(assessment.set_value(Dimension::Depth, 11.0), 10.0);
        assert_eq!(assessment.get(Dimension::Depth), 10.0);
        assert_eq!(assessment.get(Dimension::Volume), DEFAULT_VALUE);
    }

    #[test]
    fn test_scores_keep_canonical_order() {
        let assessment = Assessment::new([1.0, 2.0, 3.0, 4.0, 5.0]);
        let keys: Vec<_> = assessment.iter().map(|s| s.key()).collect();
        assert_eq!(
            keys,
            vec!["volume", "breadth", "depth", "systemization", "creative"]
        );
        assert_eq!(assessment.values(), [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_zeroed_assessment() {
        assert!(Assessment::zeroed().values().iter().all(|v| *v == 0.0));
    }
}
