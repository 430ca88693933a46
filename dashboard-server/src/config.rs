//! Configuration module

use std::env;

use gridguard_core::constants;
use gridguard_core::RiskThresholds;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the exported ONNX regressor
    pub model_path: String,

    /// Transformer capacity in MW
    pub capacity_mw: f64,

    /// Utilization tiers
    pub thresholds: RiskThresholds,

    /// Temperature step of the load-vs-temperature chart (°C)
    pub chart_step_c: f64,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_path: constants::get_model_path(),

            capacity_mw: constants::get_capacity_mw(),

            thresholds: RiskThresholds::from_env(),

            chart_step_c: constants::get_chart_step_c(),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            model_path: constants::DEFAULT_MODEL_PATH.to_string(),
            capacity_mw: constants::DEFAULT_CAPACITY_MW,
            thresholds: RiskThresholds::default(),
            chart_step_c: constants::DEFAULT_CHART_STEP_C,
            environment: "development".to_string(),
        }
    }
}
