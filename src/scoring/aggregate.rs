use crate::core::Assessment;

/// Round to one decimal place, halves rounding up.
///
/// Scores are never negative, so rounding half away from zero is the same
/// as rounding half up.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Arithmetic mean of the five dimension values, rounded to one decimal.
pub fn compute_aggregate(assessment: &Assessment) -> f64 {
    let values = assessment.values();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    round_to_tenth(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_of_reference_benchmark() {
        let assessment = Assessment::new([9.0, 8.5, 9.0, 5.0, 2.0]);
        assert_eq!(compute_aggregate(&assessment), 6.7);
    }

    #[test]
    fn test_aggregate_bounds() {
        assert_eq!(compute_aggregate(&Assessment::zeroed()), 0.0);
        assert_eq!(compute_aggregate(&Assessment::new([10.0; 5])), 10.0);
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let a = Assessment::new([1.0, 2.5, 7.0, 9.5, 4.0]);
        let b = Assessment::new([9.5, 4.0, 1.0, 7.0, 2.5]);
        assert_eq!(compute_aggregate(&a), compute_aggregate(&b));
    }

    #[test]
    fn test_round_to_tenth_half_up() {
        assert_eq!(round_to_tenth(6.25), 6.3);
        assert_eq!(round_to_tenth(6.24), 6.2);
        assert_eq!(round_to_tenth(0.05), 0.1);
        assert_eq!(round_to_tenth(3.0), 3.0);
    }
}
