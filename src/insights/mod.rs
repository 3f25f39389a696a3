//! Rule-based insights derived from an assessment.
//!
//! Insights are recomputed from scratch for every assessment snapshot; there
//! is no cached or incremental state here.

pub mod rules;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{Assessment, Dimension};
use crate::scoring::{compute_aggregate, tier_for, Tier};

pub use rules::{PatternRule, PATTERN_RULES};

/// At most this many suggestions are kept, in generation order.
pub const MAX_SUGGESTIONS: usize = 2;

/// Strengths text when no dimension is strong yet.
pub const FOUNDATIONAL_STRENGTHS: &str = "Building foundational skills";

/// Maturity classification of the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityLevel {
    Beginning,
    Developing,
    Advanced,
}

impl MaturityLevel {
    pub fn from_aggregate(aggregate: f64) -> Self {
        if aggregate >= 7.0 {
            MaturityLevel::Advanced
        } else if aggregate >= 5.0 {
            MaturityLevel::Developing
        } else {
            MaturityLevel::Beginning
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MaturityLevel::Advanced => "Advanced User",
            MaturityLevel::Developing => "Developing User",
            MaturityLevel::Beginning => "Beginning User",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derived maturity, strengths text and growth suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub maturity_level: MaturityLevel,
    pub strengths: String,
    pub suggestions: Vec<String>,
}

/// Suggestion emitted for an untapped dimension.
pub fn expansion_suggestion(dimension: Dimension) -> String {
    format!("Consider expanding {}", dimension.label().to_lowercase())
}

/// Generate insights for an assessment and its aggregate.
///
/// Strong dimensions feed the strengths text and untapped ones produce an
/// expansion suggestion, in canonical order. The pattern rules then append
/// their suggestions in declaration order, and the list is cut to the first
/// [`MAX_SUGGESTIONS`] entries.
pub fn generate_insights(assessment: &Assessment, aggregate: f64) -> Insight {
    let mut strengths = Vec::new();
    let mut candidates = Vec::new();

    for score in assessment.iter() {
        match tier_for(score.value()) {
            Tier::Strong => strengths.push(score.label().to_lowercase()),
            Tier::Untapped => candidates.push(expansion_suggestion(score.dimension)),
            Tier::Developing => {}
        }
    }

    candidates.extend(
        PATTERN_RULES
            .iter()
            .filter(|rule| rule.matches(assessment))
            .map(|rule| rule.suggestion.to_string()),
    );
    candidates.truncate(MAX_SUGGESTIONS);

    let strengths = if strengths.is_empty() {
        FOUNDATIONAL_STRENGTHS.to_string()
    } else {
        format!("Strong in: {}", strengths.join(", "))
    };

    Insight {
        maturity_level: MaturityLevel::from_aggregate(aggregate),
        strengths,
        suggestions: candidates,
    }
}

/// Recompute all derived state for an assessment.
///
/// Callers invoke this after every mutation; nothing tracks dependencies
/// implicitly.
pub fn recompute(assessment: &Assessment) -> (f64, Insight) {
    let aggregate = compute_aggregate(assessment);
    let insight = generate_insights(assessment, aggregate);
    (aggregate, insight)
}
