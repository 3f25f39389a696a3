//! Cross-dimension pattern rules.
//!
//! Each rule is a conjunction of threshold checks on individual dimensions.
//! Rules are evaluated in declaration order and independently of the
//! per-dimension strengths and suggestions.

use crate::core::{Assessment, Dimension};

/// Threshold comparison on a single dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Condition {
    AtLeast(Dimension, f64),
    Below(Dimension, f64),
}

impl Condition {
    pub fn holds(&self, assessment: &Assessment) -> bool {
        match *self {
            Condition::AtLeast(dimension, threshold) => assessment.get(dimension) >= threshold,
            Condition::Below(dimension, threshold) => assessment.get(dimension) < threshold,
        }
    }
}

/// A named pattern and the suggestion it emits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternRule {
    pub name: &'static str,
    pub conditions: &'static [Condition],
    pub suggestion: &'static str,
}

impl PatternRule {
    /// All conditions must hold.
    pub fn matches(&self, assessment: &Assessment) -> bool {
        self.conditions.iter().all(|c| c.holds(assessment))
    }
}

pub const PATTERN_RULES: &[PatternRule] = &[
    PatternRule {
        name: "efficiency-gap",
        conditions: &[
            Condition::AtLeast(Dimension::Volume, 8.0),
            Condition::AtLeast(Dimension::Depth, 8.0),
            Condition::Below(Dimension::Systemization, 6.0),
        ],
        suggestion: "High usage + depth but low systemization = opportunity for efficiency gains",
    },
    PatternRule {
        name: "creative-gap",
        conditions: &[
            Condition::AtLeast(Dimension::Breadth, 7.0),
            Condition::Below(Dimension::Creative, 5.0),
        ],
        suggestion: "Multi-domain user who could explore creative AI applications",
    },
];
