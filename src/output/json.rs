use serde::Serialize;

use crate::core::Assessment;
use crate::errors::ScorecardError;
use crate::insights::{Insight, MaturityLevel};
use crate::scoring::{color_key_for, tier_for, ColorKey, Tier};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionReport {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub tier: Tier,
    pub color: ColorKey,
}

/// Everything the live view shows, in one serializable value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardReport {
    pub dimensions: Vec<DimensionReport>,
    pub aggregate: f64,
    pub aggregate_tier: Tier,
    pub maturity_level: MaturityLevel,
    pub maturity_label: &'static str,
    pub strengths: String,
    pub suggestions: Vec<String>,
}

pub fn build_report(assessment: &Assessment, aggregate: f64, insight: &Insight) -> ScorecardReport {
    ScorecardReport {
        dimensions: assessment
            .iter()
            .map(|score| DimensionReport {
                key: score.key(),
                label: score.label(),
                value: score.value(),
                tier: tier_for(score.value()),
                color: color_key_for(score.value()),
            })
            .collect(),
        aggregate,
        aggregate_tier: tier_for(aggregate),
        maturity_level: insight.maturity_level,
        maturity_label: insight.maturity_level.label(),
        strengths: insight.strengths.clone(),
        suggestions: insight.suggestions.clone(),
    }
}

pub fn to_json_string(report: &ScorecardReport) -> Result<String, ScorecardError> {
    serde_json::to_string_pretty(report).map_err(|e| ScorecardError::encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::recompute;

    #[test]
    fn test_report_json_shape() {
        let assessment = Assessment::new([9.0, 8.5, 9.0, 5.0, 2.0]);
        let (aggregate, insight) = recompute(&assessment);
        let report = build_report(&assessment, aggregate, &insight);

        let json: serde_json::Value =
            serde_json::from_str(&to_json_string(&report).unwrap()).unwrap();
        assert_eq!(json["aggregate"], 6.7);
        assert_eq!(json["aggregate_tier"], "Developing");
        assert_eq!(json["maturity_level"], "Developing");
        assert_eq!(json["maturity_label"], "Developing User");
        assert_eq!(json["dimensions"][4]["key"], "creative");
        assert_eq!(json["dimensions"][4]["tier"], "Untapped");
        assert_eq!(json["dimensions"][4]["color"], "red");
        assert_eq!(json["suggestions"].as_array().unwrap().len(), 2);
    }
}
