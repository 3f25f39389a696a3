//! Plain-text summary used by the copy action.
//!
//! Layout, one item per line:
//!
//! ```text
//! AI Usage Scorecard
//! Volume: 9/10 (Strong)
//! ...
//! Creative Production: 2/10 (Untapped)
//!
//! Overall Score: 6.7/10 (Developing)
//! Maturity: Developing User
//! Strong in: volume, breadth, depth
//! Growth Opportunities:
//! - Consider expanding creative production
//! ```
//!
//! With emoji enabled the header, footer lines and bullets carry emoji
//! markers; the dimension lines are identical in both styles so
//! [`parse_summary`] reads either.

use std::fmt::Write as _;

use crate::core::{Assessment, Dimension, DIMENSION_COUNT};
use crate::errors::ScorecardError;
use crate::insights::Insight;
use crate::scoring::tier_for;

pub const SUMMARY_TITLE: &str = "AI Usage Scorecard";

/// Render a score the way the sliders show it: `9`, `8.5`.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Summary text with emoji markers.
pub fn to_summary_text(assessment: &Assessment, aggregate: f64, insight: &Insight) -> String {
    to_summary_text_with(assessment, aggregate, insight, true)
}

pub fn to_summary_text_with(
    assessment: &Assessment,
    aggregate: f64,
    insight: &Insight,
    emoji: bool,
) -> String {
    let marker = |symbol: &str| {
        if emoji {
            format!("{symbol} ")
        } else {
            String::new()
        }
    };
    let bullet = if emoji { "• " } else { "- " };

    let mut out = String::new();
    let _ = writeln!(out, "{}{}", marker("🎯"), SUMMARY_TITLE);
    for score in assessment.iter() {
        let _ = writeln!(
            out,
            "{}: {}/10 ({})",
            score.label(),
            format_value(score.value()),
            tier_for(score.value())
        );
    }
    out.push('\n');
    let _ = writeln!(
        out,
        "{}Overall Score: {:.1}/10 ({})",
        marker("📊"),
        aggregate,
        tier_for(aggregate)
    );
    let _ = writeln!(out, "{}Maturity: {}", marker("🏆"), insight.maturity_level);
    let _ = writeln!(out, "{}{}", marker("💪"), insight.strengths);
    if !insight.suggestions.is_empty() {
        let _ = writeln!(out, "{}Growth Opportunities:", marker("💡"));
        for suggestion in &insight.suggestions {
            let _ = writeln!(out, "{bullet}{suggestion}");
        }
    }
    out
}

/// Parse one `"{label}: {value}/10 ..."` line.
fn parse_dimension_line(line: &str) -> Option<(Dimension, Result<f64, ScorecardError>)> {
    let (label, rest) = line.split_once(": ")?;
    let dimension = Dimension::from_label(label)?;
    let (value, _) = rest.split_once("/10")?;
    let parsed = value.trim().parse::<f64>().map_err(|e| {
        ScorecardError::parse(format!("Invalid value '{}' for {}: {}", value.trim(), label, e))
    });
    Some((dimension, parsed))
}

/// Read the dimension values back out of a summary.
///
/// Lines that are not dimension lines are ignored. Every dimension must
/// appear exactly once.
pub fn parse_summary(text: &str) -> Result<Assessment, ScorecardError> {
    let mut values: [Option<f64>; DIMENSION_COUNT] = [None; DIMENSION_COUNT];

    for line in text.lines().map(str::trim) {
        let Some((dimension, value)) = parse_dimension_line(line) else {
            continue;
        };
        let slot = &mut values[dimension.index()];
        if slot.is_some() {
            return Err(ScorecardError::parse(format!(
                "Duplicate line for {}",
                dimension.label()
            )));
        }
        *slot = Some(value?);
    }

    let mut resolved = [0.0; DIMENSION_COUNT];
    for dimension in Dimension::ALL {
        resolved[dimension.index()] = values[dimension.index()].ok_or_else(|| {
            ScorecardError::parse(format!("Missing line for {}", dimension.label()))
        })?;
    }
    Ok(Assessment::new(resolved))
}
