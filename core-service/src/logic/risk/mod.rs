//! Risk Module
//!
//! Turns a predicted next-hour load into a NORMAL / WARNING / CRITICAL tier.
//!
//! ## Structure
//! - `types`: RiskTier, RiskClassification
//! - `rules`: thresholds and constants
//! - `classifier`: utilization + classification logic
//!
//! ## Usage
//! ```ignore
//! use gridguard_core::logic::risk::{classify_load, RiskThresholds, RiskTier};
//!
//! let result = classify_load(21.0, 20.0, &RiskThresholds::default())?;
//! assert_eq!(result.tier, RiskTier::Critical);
//! ```

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{classify, classify_load, classify_with_thresholds, utilization};
pub use rules::{RiskThresholds, CRITICAL_THRESHOLD_PCT, WARNING_THRESHOLD_PCT};
pub use types::{RiskClassification, RiskTier};
