//! Feature Layout - Centralized Feature Definition
//!
//! **CRITICAL: This file controls the feature schema**
//!
//! The trained regressor consumes columns in exactly this order. A vector
//! built in any other order still produces a number, just a wrong one, so
//! every path into the model checks against this layout.
//!
//! ## Rules (NEVER break these):
//! 1. Add feature → increment FEATURE_VERSION
//! 2. Change order → increment FEATURE_VERSION
//! 3. Remove feature → increment FEATURE_VERSION

use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use crate::error::{GridGuardError, Result};

// ============================================================================
// FEATURE VERSION
// ============================================================================

/// Current feature layout version
/// MUST be incremented when layout changes
pub const FEATURE_VERSION: u8 = 1;

// ============================================================================
// FEATURE LAYOUT (Authoritative source)
// ============================================================================

/// Training-time column names in exact vector order
pub const FEATURE_LAYOUT: &[&str] = &[
    "Time (hour)",           // 0: Hour of day, 0-23
    "Current_Load_MW",       // 1: Load right now
    "Temperature_C",         // 2: Ambient temperature
    "Consumers",             // 3: Connected consumers
    "Area_Type_Industrial",  // 4: One-hot, Industrial
    "Area_Type_Residential", // 5: One-hot, Residential (Commercial = both 0)
];

/// Total number of features
/// IMPORTANT: Must match FEATURE_LAYOUT.len()!
pub const FEATURE_COUNT: usize = 6;

pub const IDX_TIME_HOUR: usize = 0;
pub const IDX_CURRENT_LOAD: usize = 1;
pub const IDX_TEMPERATURE: usize = 2;
pub const IDX_CONSUMERS: usize = 3;
pub const IDX_IS_INDUSTRIAL: usize = 4;
pub const IDX_IS_RESIDENTIAL: usize = 5;

// ============================================================================
// LAYOUT HASH
// ============================================================================

/// CRC32 of the feature version and column names
pub fn layout_hash() -> u32 {
    let mut hasher = Hasher::new();

    hasher.update(&[FEATURE_VERSION]);

    for name in FEATURE_LAYOUT {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }

    hasher.finalize()
}

// ============================================================================
// LAYOUT INFO
// ============================================================================

/// Complete layout information for status reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutInfo {
    pub version: u8,
    pub hash: u32,
    pub feature_count: usize,
    pub feature_names: Vec<String>,
}

impl LayoutInfo {
    pub fn current() -> Self {
        Self {
            version: FEATURE_VERSION,
            hash: layout_hash(),
            feature_count: FEATURE_COUNT,
            feature_names: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for LayoutInfo {
    fn default() -> Self {
        Self::current()
    }
}

// ============================================================================
// LAYOUT VALIDATION
// ============================================================================

/// Validate that incoming data matches current layout
pub fn validate_layout(incoming_version: u8, incoming_hash: u32) -> Result<()> {
    let current_hash = layout_hash();

    if incoming_version != FEATURE_VERSION || incoming_hash != current_hash {
        return Err(GridGuardError::SchemaMismatch(format!(
            "expected layout v{} (hash: {:08x}), got v{} (hash: {:08x})",
            FEATURE_VERSION, current_hash, incoming_version, incoming_hash
        )));
    }

    Ok(())
}

pub fn is_layout_compatible(version: u8, hash: u32) -> bool {
    version == FEATURE_VERSION && hash == layout_hash()
}

// ============================================================================
// FEATURE INDEX LOOKUP
// ============================================================================

/// Get feature index by column name
pub fn feature_index(name: &str) -> Option<usize> {
    FEATURE_LAYOUT.iter().position(|&n| n == name)
}

/// Get column name by index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_count() {
        assert_eq!(FEATURE_COUNT, 6);
        assert_eq!(FEATURE_LAYOUT.len(), FEATURE_COUNT);
    }

    #[test]
    fn test_layout_hash_consistency() {
        assert_eq!(layout_hash(), layout_hash());
        assert_ne!(layout_hash(), 0);
    }

    #[test]
    fn test_validate_layout() {
        assert!(validate_layout(FEATURE_VERSION, layout_hash()).is_ok());
        assert!(is_layout_compatible(FEATURE_VERSION, layout_hash()));

        let err = validate_layout(FEATURE_VERSION + 1, layout_hash()).unwrap_err();
        assert!(matches!(err, GridGuardError::SchemaMismatch(_)));

        let err = validate_layout(FEATURE_VERSION, layout_hash().wrapping_add(1)).unwrap_err();
        assert!(matches!(err, GridGuardError::SchemaMismatch(_)));
    }

    #[test]
    fn test_index_constants_match_names() {
        assert_eq!(feature_index("Time (hour)"), Some(IDX_TIME_HOUR));
        assert_eq!(feature_index("Current_Load_MW"), Some(IDX_CURRENT_LOAD));
        assert_eq!(feature_index("Temperature_C"), Some(IDX_TEMPERATURE));
        assert_eq!(feature_index("Consumers"), Some(IDX_CONSUMERS));
        assert_eq!(feature_index("Area_Type_Industrial"), Some(IDX_IS_INDUSTRIAL));
        assert_eq!(feature_index("Area_Type_Residential"), Some(IDX_IS_RESIDENTIAL));
        assert_eq!(feature_index("Area_Type_Commercial"), None);
    }

    #[test]
    fn test_feature_name() {
        assert_eq!(feature_name(0), Some("Time (hour)"));
        assert_eq!(feature_name(5), Some("Area_Type_Residential"));
        assert_eq!(feature_name(6), None);
    }

    #[test]
    fn test_layout_info() {
        let info = LayoutInfo::current();
        assert_eq!(info.version, FEATURE_VERSION);
        assert_eq!(info.feature_count, FEATURE_COUNT);
        assert_eq!(info.feature_names[3], "Consumers");
    }
}
