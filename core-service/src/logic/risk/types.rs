//! Risk Types
//!
//! Core types for risk classification. No logic here.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Transformer risk tier derived from utilization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskTier {
    /// Below the warning threshold
    Normal,
    /// Approaching capacity
    Warning,
    /// At or above capacity
    Critical,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Normal => "NORMAL",
            RiskTier::Warning => "WARNING",
            RiskTier::Critical => "CRITICAL",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Normal => "green",
            RiskTier::Warning => "orange",
            RiskTier::Critical => "red",
        }
    }

    /// Label shown on the dashboard
    pub fn badge(&self) -> &'static str {
        match self {
            RiskTier::Normal => "NORMAL ✅",
            RiskTier::Warning => "WARNING ⚠️",
            RiskTier::Critical => "CRITICAL 🚨",
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// CLASSIFICATION RESULT
// ============================================================================

/// Output of the risk classifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskClassification {
    pub tier: RiskTier,
    /// Predicted load as a percentage of capacity
    pub utilization_pct: f64,
    pub capacity_mw: f64,
}
