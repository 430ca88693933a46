//! Risk Classifier
//!
//! Only the classification logic. Types live in `types`, thresholds in `rules`.
//! Input: predicted load + capacity. Output: RiskClassification.

use super::rules::RiskThresholds;
use super::types::{RiskClassification, RiskTier};
use crate::error::{GridGuardError, Result};

/// Predicted load as a percentage of transformer capacity
pub fn utilization(predicted_load_mw: f64, capacity_mw: f64) -> Result<f64> {
    if !capacity_mw.is_finite() || capacity_mw <= 0.0 {
        return Err(GridGuardError::InvalidCapacity(capacity_mw));
    }
    if !predicted_load_mw.is_finite() {
        return Err(GridGuardError::Inference(format!(
            "non-finite predicted load: {}",
            predicted_load_mw
        )));
    }
    Ok(predicted_load_mw / capacity_mw * 100.0)
}

/// Classify a utilization percentage with the reference thresholds
pub fn classify(utilization_pct: f64) -> RiskTier {
    classify_with_thresholds(utilization_pct, &RiskThresholds::default())
}

/// Classification with custom thresholds; lower bounds are inclusive
pub fn classify_with_thresholds(utilization_pct: f64, thresholds: &RiskThresholds) -> RiskTier {
    if utilization_pct < thresholds.warning_pct {
        RiskTier::Normal
    } else if utilization_pct < thresholds.critical_pct {
        RiskTier::Warning
    } else {
        RiskTier::Critical
    }
}

/// Utilization + tier in one step
pub fn classify_load(
    predicted_load_mw: f64,
    capacity_mw: f64,
    thresholds: &RiskThresholds,
) -> Result<RiskClassification> {
    let utilization_pct = utilization(predicted_load_mw, capacity_mw)?;
    let tier = classify_with_thresholds(utilization_pct, thresholds);

    log::debug!(
        "Load {:.3} MW on {:.1} MW capacity -> {:.2}% ({})",
        predicted_load_mw,
        capacity_mw,
        utilization_pct,
        tier
    );

    Ok(RiskClassification {
        tier,
        utilization_pct,
        capacity_mw,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CAPACITY_MW;

    #[test]
    fn test_boundaries_two_decimals() {
        assert_eq!(classify(79.99), RiskTier::Normal);
        assert_eq!(classify(80.00), RiskTier::Warning);
        assert_eq!(classify(99.99), RiskTier::Warning);
        assert_eq!(classify(100.00), RiskTier::Critical);
    }

    #[test]
    fn test_boundaries_three_decimals() {
        assert_eq!(classify(79.999), RiskTier::Normal);
        assert_eq!(classify(80.0), RiskTier::Warning);
        assert_eq!(classify(99.999), RiskTier::Warning);
        assert_eq!(classify(100.0), RiskTier::Critical);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(classify(0.0), RiskTier::Normal);
        assert_eq!(classify(-5.0), RiskTier::Normal);
        assert_eq!(classify(250.0), RiskTier::Critical);
    }

    #[test]
    fn test_overload_scenario() {
        let result = classify_load(21.0, 20.0, &RiskThresholds::default()).unwrap();
        assert!((result.utilization_pct - 105.0).abs() < 1e-9);
        assert_eq!(result.tier, RiskTier::Critical);
    }

    #[test]
    fn test_load_at_tier_edges() {
        let t = RiskThresholds::default();
        assert_eq!(classify_load(16.0, DEFAULT_CAPACITY_MW, &t).unwrap().tier, RiskTier::Warning);
        assert_eq!(classify_load(15.9, DEFAULT_CAPACITY_MW, &t).unwrap().tier, RiskTier::Normal);
        assert_eq!(classify_load(20.0, DEFAULT_CAPACITY_MW, &t).unwrap().tier, RiskTier::Critical);
    }

    #[test]
    fn test_invalid_capacity() {
        assert_eq!(utilization(10.0, 0.0), Err(GridGuardError::InvalidCapacity(0.0)));
        assert!(matches!(utilization(10.0, -1.0), Err(GridGuardError::InvalidCapacity(_))));
        assert!(matches!(utilization(10.0, f64::NAN), Err(GridGuardError::InvalidCapacity(_))));
    }

    #[test]
    fn test_non_finite_prediction() {
        assert!(matches!(utilization(f64::NAN, 20.0), Err(GridGuardError::Inference(_))));
        assert!(matches!(utilization(f64::INFINITY, 20.0), Err(GridGuardError::Inference(_))));
    }

    #[test]
    fn test_custom_thresholds() {
        let strict = RiskThresholds { warning_pct: 70.0, critical_pct: 90.0 };
        assert_eq!(classify_with_thresholds(75.0, &strict), RiskTier::Warning);
        assert_eq!(classify_with_thresholds(90.0, &strict), RiskTier::Critical);
        assert!(strict.is_ordered());
        assert!(!RiskThresholds { warning_pct: 100.0, critical_pct: 80.0 }.is_ordered());
    }

    #[test]
    fn test_tier_labels() {
        assert_eq!(RiskTier::Critical.to_string(), "CRITICAL");
        assert_eq!(RiskTier::Warning.color(), "orange");
        assert!(RiskTier::Normal < RiskTier::Critical);
        assert_eq!(serde_json::to_string(&RiskTier::Warning).unwrap(), "\"WARNING\"");
    }
}
