use std::fmt::Write as _;

use crate::core::{Assessment, MAX_SCORE};
use crate::formatting::Formatter;
use crate::insights::Insight;
use crate::output::summary::{format_value, SUMMARY_TITLE};
use crate::scoring::{color_key_for, tier_for};

const BAR_WIDTH: usize = 20;

/// Text bar with `value / 10` of its cells filled.
fn text_bar(value: f64, formatter: &Formatter) -> String {
    let filled = ((value / MAX_SCORE) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    let (full, empty) = if formatter.uses_emoji() {
        ("█", "░")
    } else {
        ("#", "-")
    };
    format!(
        "{}{}",
        formatter.severity(&full.repeat(filled), color_key_for(value)),
        formatter.dim(&empty.repeat(BAR_WIDTH - filled))
    )
}

/// Render the live scorecard.
///
/// Verbosity 1 adds each dimension's hint, 2 also its description.
pub fn render_terminal(
    assessment: &Assessment,
    aggregate: f64,
    insight: &Insight,
    formatter: &Formatter,
    verbosity: u8,
) -> String {
    let label_width = assessment
        .iter()
        .map(|s| s.label().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}{}",
        formatter.emoji("🎯", ""),
        formatter.header(SUMMARY_TITLE)
    );
    out.push('\n');

    for score in assessment.iter() {
        let value = score.value();
        let tier = tier_for(value);
        let _ = writeln!(
            out,
            "{:<width$}  {}  {:>4}/10  {}",
            score.label(),
            text_bar(value, formatter),
            format_value(value),
            formatter.severity(tier.label(), tier.color_key()),
            width = label_width
        );
        if verbosity >= 1 {
            let _ = writeln!(out, "  {}", formatter.dim(score.dimension.hint()));
        }
        if verbosity >= 2 {
            let _ = writeln!(out, "  {}", formatter.dim(score.dimension.description()));
        }
    }

    out.push('\n');
    let aggregate_tier = tier_for(aggregate);
    let _ = writeln!(
        out,
        "{}{} {}",
        formatter.emoji("📊", ""),
        formatter.bold("Overall Score:"),
        formatter.severity(&format!("{aggregate:.1}/10"), aggregate_tier.color_key())
    );
    let _ = writeln!(
        out,
        "{}{} {}",
        formatter.emoji("🏆", ""),
        formatter.bold("Maturity:"),
        insight.maturity_level
    );
    let _ = writeln!(out, "{}{}", formatter.emoji("💪", ""), insight.strengths);
    if !insight.suggestions.is_empty() {
        let _ = writeln!(
            out,
            "{}{}",
            formatter.emoji("💡", ""),
            formatter.bold("Growth Opportunities:")
        );
        for suggestion in &insight.suggestions {
            let _ = writeln!(out, "  - {suggestion}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::FormattingConfig;
    use crate::insights::recompute;

    fn plain() -> Formatter {
        Formatter::new(FormattingConfig::plain())
    }

    #[test]
    fn test_plain_terminal_view() {
        let assessment = Assessment::new([9.0, 8.5, 9.0, 5.0, 2.0]);
        let (aggregate, insight) = recompute(&assessment);
        let out = render_terminal(&assessment, aggregate, &insight, &plain(), 0);

        assert!(out.starts_with("AI Usage Scorecard\n"));
        assert!(out.contains("Creative Production  ####----------------     2/10  Untapped"));
        assert!(out.contains("Overall Score: 6.7/10"));
        assert!(out.contains("  - Consider expanding creative production"));
        assert!(!out.contains(assessment.scores()[0].dimension.hint()));
    }

    #[test]
    fn test_verbose_terminal_view_shows_hints() {
        let assessment = Assessment::default();
        let (aggregate, insight) = recompute(&assessment);
        let out = render_terminal(&assessment, aggregate, &insight, &plain(), 2);

        assert!(out.contains("How often do you use AI?"));
        assert!(out.contains("Using AI for multimedia content and creative assets"));
    }

    #[test]
    fn test_text_bar_bounds() {
        let formatter = plain();
        assert_eq!(text_bar(0.0, &formatter), "-".repeat(BAR_WIDTH));
        assert_eq!(text_bar(10.0, &formatter), "#".repeat(BAR_WIDTH));
    }
}
