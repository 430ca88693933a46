//! Assessment pipeline
//!
//! encode → predict → utilization → classify, recomputed from scratch for
//! every interaction. Nothing is kept between calls.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{GridGuardError, Result};
use crate::logic::features::{encode, FeatureVector, InputRecord};
use crate::logic::model::LoadModel;
use crate::logic::risk::{classify_load, RiskClassification, RiskThresholds, RiskTier};

/// Result of one prediction, ready for rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub input: InputRecord,
    pub features: FeatureVector,
    /// Next-hour load (MW)
    pub predicted_load_mw: f64,
    pub risk: RiskClassification,
}

impl Assessment {
    pub fn tier(&self) -> RiskTier {
        self.risk.tier
    }

    pub fn utilization_pct(&self) -> f64 {
        self.risk.utilization_pct
    }

    /// "21.00 MW"
    pub fn predicted_load_display(&self) -> String {
        format!("{:.2} MW", self.predicted_load_mw)
    }

    /// "105.0%"
    pub fn utilization_display(&self) -> String {
        format!("{:.1}%", self.risk.utilization_pct)
    }

    /// Predicted minus current load (MW)
    pub fn load_delta_mw(&self) -> f64 {
        self.predicted_load_mw - self.input.current_load_mw
    }
}

/// Owns the model handle and the classification settings
#[derive(Clone)]
pub struct Assessor {
    model: Arc<dyn LoadModel>,
    capacity_mw: f64,
    thresholds: RiskThresholds,
    /// Completed assessments, shared across clones. Chart sweeps call the
    /// model directly, so the model's own count is higher.
    assessments: Arc<AtomicU64>,
}

impl Assessor {
    pub fn new(model: Arc<dyn LoadModel>, capacity_mw: f64, thresholds: RiskThresholds) -> Result<Self> {
        if !capacity_mw.is_finite() || capacity_mw <= 0.0 {
            return Err(GridGuardError::InvalidCapacity(capacity_mw));
        }
        Ok(Self {
            model,
            capacity_mw,
            thresholds,
            assessments: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn model(&self) -> &Arc<dyn LoadModel> {
        &self.model
    }

    pub fn capacity_mw(&self) -> f64 {
        self.capacity_mw
    }

    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    pub fn assessment_count(&self) -> u64 {
        self.assessments.load(Ordering::Relaxed)
    }

    /// Encode and run the model, without classification
    pub fn predict_load(&self, record: &InputRecord) -> Result<f64> {
        let features = encode(record)?;
        Ok(f64::from(self.model.predict(&features)?))
    }

    pub fn assess(&self, record: &InputRecord) -> Result<Assessment> {
        let features = encode(record)?;
        let predicted_load_mw = f64::from(self.model.predict(&features)?);
        let risk = classify_load(predicted_load_mw, self.capacity_mw, &self.thresholds)?;
        self.assessments.fetch_add(1, Ordering::Relaxed);

        log::info!(
            "Assessment: {} area, {:.2} MW now -> {:.2} MW next hour, {:.1}% ({})",
            record.area_type,
            record.current_load_mw,
            predicted_load_mw,
            risk.utilization_pct,
            risk.tier
        );

        Ok(Assessment {
            input: *record,
            features,
            predicted_load_mw,
            risk,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_CAPACITY_MW;
    use crate::logic::features::AreaType;
    use crate::logic::model::FixedLoadModel;

    fn assessor(load: f32) -> Assessor {
        Assessor::new(
            Arc::new(FixedLoadModel::new(load)),
            DEFAULT_CAPACITY_MW,
            RiskThresholds::default(),
        )
        .unwrap()
    }

    fn industrial() -> InputRecord {
        InputRecord {
            area_type: AreaType::Industrial,
            ..InputRecord::default()
        }
    }

    #[test]
    fn test_critical_assessment() {
        let result = assessor(21.0).assess(&industrial()).unwrap();

        assert_eq!(result.features.values, [15.0, 18.5, 34.0, 850.0, 1.0, 0.0]);
        assert_eq!(result.tier(), RiskTier::Critical);
        assert_eq!(result.predicted_load_display(), "21.00 MW");
        assert_eq!(result.utilization_display(), "105.0%");
        assert!((result.load_delta_mw() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_each_tier() {
        assert_eq!(assessor(10.0).assess(&industrial()).unwrap().tier(), RiskTier::Normal);
        assert_eq!(assessor(17.0).assess(&industrial()).unwrap().tier(), RiskTier::Warning);
        assert_eq!(assessor(20.0).assess(&industrial()).unwrap().tier(), RiskTier::Critical);
    }

    #[test]
    fn test_display_rounding() {
        let result = assessor(12.345).assess(&InputRecord::default()).unwrap();
        assert_eq!(result.predicted_load_display(), "12.35 MW");
        assert_eq!(result.utilization_display(), "61.7%");
    }

    #[test]
    fn test_invalid_capacity_rejected() {
        let model: Arc<dyn LoadModel> = Arc::new(FixedLoadModel::new(1.0));
        assert!(matches!(
            Assessor::new(model.clone(), 0.0, RiskThresholds::default()),
            Err(GridGuardError::InvalidCapacity(_))
        ));
        assert!(Assessor::new(model, f64::INFINITY, RiskThresholds::default()).is_err());
    }

    #[test]
    fn test_model_failure_propagates() {
        let result = assessor(f32::NAN).assess(&InputRecord::default());
        assert!(matches!(result, Err(GridGuardError::Inference(_))));
    }

    #[test]
    fn test_assessment_count_excludes_bare_predictions() {
        let assessor = assessor(12.0);
        let shared = assessor.clone();

        assessor.assess(&InputRecord::default()).unwrap();
        for t in [10.0, 20.0, 30.0] {
            shared.predict_load(&InputRecord::default().with_temperature(t)).unwrap();
        }

        assert_eq!(assessor.assessment_count(), 1);
        assert_eq!(shared.assessment_count(), 1);
        assert_eq!(assessor.model().stats().inference_count, 4);
    }

    #[test]
    fn test_failed_assessment_not_counted() {
        let assessor = assessor(f32::NAN);
        assert!(assessor.assess(&InputRecord::default()).is_err());
        assert_eq!(assessor.assessment_count(), 0);
    }
}
