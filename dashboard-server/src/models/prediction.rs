//! Prediction request / response model

use chrono::{DateTime, Utc};
use gridguard_core::logic::features::input::{
    CONSUMERS_MAX, CONSUMERS_MIN, CURRENT_LOAD_MAX_MW, CURRENT_LOAD_MIN_MW, TEMPERATURE_MAX_C,
    TEMPERATURE_MIN_C, TIME_HOUR_MAX,
};
use gridguard_core::logic::features::{AreaType, LayoutInfo, FEATURE_LAYOUT};
use gridguard_core::{Assessment, DashboardCharts, InputRecord, ModelStatus, RiskThresholds, RiskTier};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::AppError;

/// Transformer inputs, from the JSON API or the dashboard form.
///
/// Ranges mirror the dashboard widgets.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct PredictRequest {
    #[validate(range(max = TIME_HOUR_MAX))]
    pub time_hour: u8,
    #[validate(range(min = CURRENT_LOAD_MIN_MW, max = CURRENT_LOAD_MAX_MW))]
    pub current_load_mw: f64,
    #[validate(range(min = TEMPERATURE_MIN_C, max = TEMPERATURE_MAX_C))]
    pub temperature_c: f64,
    pub area_type: String,
    #[validate(range(min = CONSUMERS_MIN, max = CONSUMERS_MAX))]
    pub consumers: u32,
}

impl PredictRequest {
    /// Range-check and parse into a core InputRecord
    pub fn into_record(self) -> Result<InputRecord, AppError> {
        self.validate()?;
        if !self.current_load_mw.is_finite() || !self.temperature_c.is_finite() {
            return Err(AppError::ValidationError(
                "Invalid input: load and temperature must be finite".to_string(),
            ));
        }

        let area_type: AreaType = self.area_type.parse()?;

        Ok(InputRecord {
            time_hour: self.time_hour,
            current_load_mw: self.current_load_mw,
            temperature_c: self.temperature_c,
            area_type,
            consumers: self.consumers,
        })
    }
}

impl From<&InputRecord> for PredictRequest {
    fn from(record: &InputRecord) -> Self {
        Self {
            time_hour: record.time_hour,
            current_load_mw: record.current_load_mw,
            temperature_c: record.temperature_c,
            area_type: record.area_type.to_string(),
            consumers: record.consumers,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedFeature {
    pub name: &'static str,
    pub value: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub id: Uuid,
    pub input: InputRecord,
    pub features: Vec<NamedFeature>,
    pub predicted_load_mw: f64,
    pub predicted_load_display: String,
    pub utilization_pct: f64,
    pub utilization_display: String,
    pub risk: RiskTier,
    pub risk_label: &'static str,
    pub color: &'static str,
    pub capacity_mw: f64,
    pub charts: DashboardCharts,
    pub created_at: DateTime<Utc>,
}

impl PredictResponse {
    pub fn new(assessment: &Assessment, charts: DashboardCharts) -> Self {
        let tier = assessment.tier();
        Self {
            id: Uuid::new_v4(),
            input: assessment.input,
            features: FEATURE_LAYOUT
                .iter()
                .zip(assessment.features.values.iter())
                .map(|(name, value)| NamedFeature { name: *name, value: *value })
                .collect(),
            predicted_load_mw: assessment.predicted_load_mw,
            predicted_load_display: assessment.predicted_load_display(),
            utilization_pct: assessment.utilization_pct(),
            utilization_display: assessment.utilization_display(),
            risk: tier,
            risk_label: tier.badge(),
            color: tier.color(),
            capacity_mw: assessment.risk.capacity_mw,
            charts,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelStatusResponse {
    /// Metadata and model call statistics
    pub model: ModelStatus,
    /// User predictions served
    pub assessment_count: u64,
    pub layout: LayoutInfo,
    pub capacity_mw: f64,
    pub thresholds: RiskThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictRequest {
        PredictRequest {
            time_hour: 15,
            current_load_mw: 18.5,
            temperature_c: 34.0,
            area_type: "Industrial".to_string(),
            consumers: 850,
        }
    }

    #[test]
    fn test_valid_request() {
        let record = request().into_record().unwrap();
        assert_eq!(record.area_type, AreaType::Industrial);
        assert_eq!(record.consumers, 850);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let cases = [
            PredictRequest { time_hour: 24, ..request() },
            PredictRequest { current_load_mw: 30.5, ..request() },
            PredictRequest { temperature_c: 9.0, ..request() },
            PredictRequest { consumers: 5001, ..request() },
            PredictRequest { consumers: 9, ..request() },
        ];
        for case in cases {
            assert!(matches!(case.into_record(), Err(AppError::ValidationError(_))));
        }
    }

    #[test]
    fn test_unknown_area_rejected() {
        let req = PredictRequest { area_type: "Agricultural".to_string(), ..request() };
        assert!(matches!(req.into_record(), Err(AppError::Prediction(_))));
    }

    #[test]
    fn test_nan_rejected() {
        let req = PredictRequest { temperature_c: f64::NAN, ..request() };
        assert!(req.into_record().is_err());
    }
}
