//! Risk Classification Rules & Thresholds
//!
//! Constants and config only. Classification lives in `classifier`.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CRITICAL_PCT, DEFAULT_WARNING_PCT};

/// At or above this utilization (%) = Warning
pub const WARNING_THRESHOLD_PCT: f64 = DEFAULT_WARNING_PCT;

/// At or above this utilization (%) = Critical
pub const CRITICAL_THRESHOLD_PCT: f64 = DEFAULT_CRITICAL_PCT;

/// Thresholds for classification (configurable)
///
/// Each tier's lower bound is inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Below this = Normal
    pub warning_pct: f64,
    /// At or above this = Critical, between = Warning
    pub critical_pct: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            warning_pct: WARNING_THRESHOLD_PCT,
            critical_pct: CRITICAL_THRESHOLD_PCT,
        }
    }
}

impl RiskThresholds {
    /// Thresholds from GRIDGUARD_WARNING_PCT / GRIDGUARD_CRITICAL_PCT.
    /// Falls back to the defaults when the pair is not ordered.
    pub fn from_env() -> Self {
        let thresholds = Self {
            warning_pct: crate::constants::get_warning_pct(),
            critical_pct: crate::constants::get_critical_pct(),
        };
        if thresholds.is_ordered() {
            thresholds
        } else {
            log::warn!(
                "Ignoring risk thresholds warning={} critical={}: not ordered",
                thresholds.warning_pct,
                thresholds.critical_pct
            );
            Self::default()
        }
    }

    /// 0 < warning <= critical, both finite
    pub fn is_ordered(&self) -> bool {
        self.warning_pct.is_finite()
            && self.critical_pct.is_finite()
            && self.warning_pct > 0.0
            && self.warning_pct <= self.critical_pct
    }
}
