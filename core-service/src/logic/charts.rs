//! Chart data for the dashboard
//!
//! Every series is derived from the current assessment: the temperature
//! curve re-runs the model on the user's own record with only the
//! temperature changed.

use serde::{Deserialize, Serialize};

use crate::constants::bounded_chart_step;
use crate::error::Result;
use crate::logic::assessment::{Assessment, Assessor};
use crate::logic::features::input::{TEMPERATURE_MAX_C, TEMPERATURE_MIN_C};

/// Default upper bound of the utilization axis (%)
pub const UTILIZATION_AXIS_MAX: f64 = 120.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarDatum {
    pub label: String,
    pub value: f64,
}

/// Model response to temperature for the current record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureCurve {
    pub points: Vec<ChartPoint>,
    /// The user's own temperature / predicted load
    pub current: ChartPoint,
}

/// Single utilization bar with tier reference lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationGauge {
    pub utilization_pct: f64,
    pub reference_lines: Vec<f64>,
    pub y_max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardCharts {
    pub load_vs_temperature: TemperatureCurve,
    pub utilization: UtilizationGauge,
    pub load_comparison: Vec<BarDatum>,
}

/// Temperatures from TEMPERATURE_MIN_C to TEMPERATURE_MAX_C, always
/// including `current`. Non-positive steps use the default, steps finer
/// than MIN_CHART_STEP_C are raised to it.
pub fn temperature_sweep(step_c: f64, current: f64) -> Vec<f64> {
    let step = bounded_chart_step(step_c);
    let count = ((TEMPERATURE_MAX_C - TEMPERATURE_MIN_C) / step + 1e-9).floor() as usize + 1;

    let mut temps: Vec<f64> = (0..count)
        .map(|i| TEMPERATURE_MIN_C + i as f64 * step)
        .collect();
    if current.is_finite() {
        temps.push(current);
    }

    temps.sort_by(f64::total_cmp);
    temps.dedup_by(|a, b| (*a - *b).abs() < 1e-9);
    temps
}

pub fn utilization_gauge(assessment: &Assessment, assessor: &Assessor) -> UtilizationGauge {
    let utilization_pct = assessment.utilization_pct();
    let thresholds = assessor.thresholds();
    // Keep the bar on the chart when the transformer is far over capacity
    let y_max = if utilization_pct > UTILIZATION_AXIS_MAX {
        (utilization_pct / 10.0).ceil() * 10.0
    } else {
        UTILIZATION_AXIS_MAX
    };

    UtilizationGauge {
        utilization_pct,
        reference_lines: vec![thresholds.warning_pct, thresholds.critical_pct],
        y_max,
    }
}

pub fn load_comparison(assessment: &Assessment) -> Vec<BarDatum> {
    vec![
        BarDatum {
            label: "Current Load".to_string(),
            value: assessment.input.current_load_mw,
        },
        BarDatum {
            label: "Predicted Load".to_string(),
            value: assessment.predicted_load_mw,
        },
    ]
}

pub fn temperature_curve(
    assessor: &Assessor,
    assessment: &Assessment,
    step_c: f64,
) -> Result<TemperatureCurve> {
    let record = assessment.input;
    let points = temperature_sweep(step_c, record.temperature_c)
        .into_iter()
        .map(|t| {
            assessor
                .predict_load(&record.with_temperature(t))
                .map(|y| ChartPoint { x: t, y })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TemperatureCurve {
        points,
        current: ChartPoint {
            x: record.temperature_c,
            y: assessment.predicted_load_mw,
        },
    })
}

/// All three charts for one assessment
pub fn build_charts(assessor: &Assessor, assessment: &Assessment, step_c: f64) -> Result<DashboardCharts> {
    Ok(DashboardCharts {
        load_vs_temperature: temperature_curve(assessor, assessment, step_c)?,
        utilization: utilization_gauge(assessment, assessor),
        load_comparison: load_comparison(assessment),
    })
}
