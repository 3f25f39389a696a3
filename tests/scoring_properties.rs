//! Property-based tests for the scoring engine and insight generator
//!
//! These tests verify invariants that should hold for all inputs:
//! - The aggregate stays in range and equals the rounded mean
//! - Tiers are monotonic with inclusive lower bounds
//! - Insight generation is deterministic
//! - At most two suggestions are produced
//! - The input boundary keeps values on the slider grid

use proptest::prelude::*;
use scorecard::{
    compute_aggregate, generate_insights, sanitize_value, tier_for, Assessment, Dimension, Tier,
};

fn slider_value() -> impl Strategy<Value = f64> {
    (0u8..=20).prop_map(|steps| f64::from(steps) * 0.5)
}

fn assessment() -> impl Strategy<Value = Assessment> {
    prop::array::uniform5(slider_value()).prop_map(Assessment::new)
}

proptest! {
    #[test]
    fn prop_aggregate_is_rounded_mean(assessment in assessment()) {
        let aggregate = compute_aggregate(&assessment);
        let mean = assessment.values().iter().sum::<f64>() / 5.0;

        prop_assert!((0.0..=10.0).contains(&aggregate));
        prop_assert_eq!(aggregate, (mean * 10.0).round() / 10.0);
        prop_assert!((aggregate - mean).abs() <= 0.05 + 1e-9);
    }

    #[test]
    fn prop_tier_is_monotonic(a in 0.0f64..=10.0, b in 0.0f64..=10.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(tier_for(low) <= tier_for(high));
    }

    #[test]
    fn prop_tier_bands(value in 0.0f64..=10.0) {
        let expected = if value >= 7.0 {
            Tier::Strong
        } else if value >= 4.0 {
            Tier::Developing
        } else {
            Tier::Untapped
        };
        prop_assert_eq!(tier_for(value), expected);
    }

    #[test]
    fn prop_insights_are_deterministic(assessment in assessment()) {
        let aggregate = compute_aggregate(&assessment);
        prop_assert_eq!(
            generate_insights(&assessment, aggregate),
            generate_insights(&assessment, aggregate)
        );
    }

    #[test]
    fn prop_at_most_two_suggestions(assessment in assessment()) {
        let aggregate = compute_aggregate(&assessment);
        prop_assert!(generate_insights(&assessment, aggregate).suggestions.len() <= 2);
    }

    #[test]
    fn prop_input_boundary_clamps(raw in prop::num::f64::ANY) {
        let mut assessment = Assessment::default();
        let stored = assessment.set_value(Dimension::Systemization, raw);

        prop_assert!((0.0..=10.0).contains(&stored));
        prop_assert_eq!((stored * 2.0).fract(), 0.0);
        prop_assert_eq!(stored, sanitize_value(raw));
    }
}

#[test]
fn test_tier_boundaries() {
    assert_eq!(tier_for(4.0), Tier::Developing);
    assert_eq!(tier_for(7.0), Tier::Strong);
    assert_eq!(tier_for(3.5), Tier::Untapped);
    assert_eq!(tier_for(6.5), Tier::Developing);
}
