//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default capacity or model location, only edit this file.

/// Reference transformer capacity (MW)
pub const DEFAULT_CAPACITY_MW: f64 = 20.0;

/// Default location of the exported regression model
pub const DEFAULT_MODEL_PATH: &str = "models/gridguard_transformer_model.onnx";

/// Utilization (%) at which a transformer enters WARNING
pub const DEFAULT_WARNING_PCT: f64 = 80.0;

/// Utilization (%) at which a transformer enters CRITICAL
pub const DEFAULT_CRITICAL_PCT: f64 = 100.0;

/// Temperature sweep step for the load-vs-temperature chart (°C)
pub const DEFAULT_CHART_STEP_C: f64 = 5.0;

/// Finest allowed sweep step; every sweep point is one model call
pub const MIN_CHART_STEP_C: f64 = 0.5;

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "GridGuard AI";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("GRIDGUARD_MODEL_PATH")
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get transformer capacity from environment or use default
pub fn get_capacity_mw() -> f64 {
    env_f64("GRIDGUARD_CAPACITY_MW", DEFAULT_CAPACITY_MW)
}

/// Get WARNING threshold from environment or use default
pub fn get_warning_pct() -> f64 {
    env_f64("GRIDGUARD_WARNING_PCT", DEFAULT_WARNING_PCT)
}

/// Get CRITICAL threshold from environment or use default
pub fn get_critical_pct() -> f64 {
    env_f64("GRIDGUARD_CRITICAL_PCT", DEFAULT_CRITICAL_PCT)
}

/// Get chart temperature step from environment or use default.
/// Non-positive values fall back to the default, values below
/// MIN_CHART_STEP_C are raised to it.
pub fn get_chart_step_c() -> f64 {
    let step = env_f64("GRIDGUARD_CHART_STEP_C", DEFAULT_CHART_STEP_C);
    let bounded = bounded_chart_step(step);
    if bounded != step {
        log::warn!(
            "GRIDGUARD_CHART_STEP_C={} out of range, using {} °C",
            step,
            bounded
        );
    }
    bounded
}

/// Clamp a sweep step into the supported range
pub fn bounded_chart_step(step_c: f64) -> f64 {
    if !step_c.is_finite() || step_c <= 0.0 {
        DEFAULT_CHART_STEP_C
    } else {
        step_c.max(MIN_CHART_STEP_C)
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_step_bounds() {
        assert_eq!(bounded_chart_step(2.5), 2.5);
        assert_eq!(bounded_chart_step(1e-4), MIN_CHART_STEP_C);
        assert_eq!(bounded_chart_step(0.0), DEFAULT_CHART_STEP_C);
        assert_eq!(bounded_chart_step(-3.0), DEFAULT_CHART_STEP_C);
        assert_eq!(bounded_chart_step(f64::INFINITY), DEFAULT_CHART_STEP_C);
    }
}
