//! Feature Vector - Core data structure for model input
//!
//! **Versioned feature vector with layout validation**
//!
//! No zeroed constructor and no pad/truncate path: a vector is built from a
//! complete set of values in layout order, or construction fails with
//! `SchemaMismatch`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::layout::{
    feature_index, layout_hash, validate_layout, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION,
};
use crate::error::{GridGuardError, Result};

// ============================================================================
// VERSIONED FEATURE VECTOR
// ============================================================================

/// Versioned Feature Vector with layout metadata
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature layout version
    pub version: u8,
    /// CRC32 hash of the feature layout (for mismatch detection)
    pub layout_hash: u32,
    /// Feature values in order defined by FEATURE_LAYOUT
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values already in layout order
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self {
            version: FEATURE_VERSION,
            layout_hash: layout_hash(),
            values,
        }
    }

    /// Create from a slice; the length must equal FEATURE_COUNT
    pub fn from_slice(values: &[f32]) -> Result<Self> {
        let array: [f32; FEATURE_COUNT] = values.try_into().map_err(|_| {
            GridGuardError::SchemaMismatch(format!(
                "expected {} features, got {}",
                FEATURE_COUNT,
                values.len()
            ))
        })?;
        Ok(Self::from_values(array))
    }

    /// Build from named columns in any order.
    ///
    /// Every column of `FEATURE_LAYOUT` must be present exactly once and no
    /// other column is accepted. Missing columns are an error, never zero.
    pub fn from_columns(columns: &[(&str, f32)]) -> Result<Self> {
        let mut slots: [Option<f32>; FEATURE_COUNT] = [None; FEATURE_COUNT];

        for &(name, value) in columns {
            let index = feature_index(name).ok_or_else(|| {
                GridGuardError::SchemaMismatch(format!("unexpected column '{}'", name))
            })?;
            if slots[index].replace(value).is_some() {
                return Err(GridGuardError::SchemaMismatch(format!(
                    "duplicate column '{}'",
                    name
                )));
            }
        }

        let missing: Vec<&str> = FEATURE_LAYOUT
            .iter()
            .zip(slots.iter())
            .filter(|(_, slot)| slot.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(GridGuardError::SchemaMismatch(format!(
                "missing columns: {}",
                missing.join(", ")
            )));
        }

        let mut values = [0.0f32; FEATURE_COUNT];
        for (value, slot) in values.iter_mut().zip(slots) {
            if let Some(v) = slot {
                *value = v;
            }
        }
        Ok(Self::from_values(values))
    }

    /// Get values as array reference
    pub fn as_array(&self) -> &[f32; FEATURE_COUNT] {
        &self.values
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f32> {
        self.values.get(index).copied()
    }

    /// Get feature by column name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.get(i))
    }

    /// Validate that this vector is compatible with current layout
    pub fn validate(&self) -> Result<()> {
        validate_layout(self.version, self.layout_hash)
    }

    pub fn is_compatible(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn feature_names(&self) -> &'static [&'static str] {
        FEATURE_LAYOUT
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        serde_json::json!({
            "feature_version": self.version,
            "layout_hash": self.layout_hash,
            "values": self.values,
            "named_values": FEATURE_LAYOUT.iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.to_string(), *value))
                .collect::<HashMap<_, _>>(),
        })
    }
}

impl From<[f32; FEATURE_COUNT]> for FeatureVector {
    fn from(values: [f32; FEATURE_COUNT]) -> Self {
        Self::from_values(values)
    }
}

impl TryFrom<Vec<f32>> for FeatureVector {
    type Error = GridGuardError;

    fn try_from(values: Vec<f32>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: [(&str, f32); FEATURE_COUNT] = [
        ("Time (hour)", 15.0),
        ("Current_Load_MW", 18.5),
        ("Temperature_C", 34.0),
        ("Consumers", 850.0),
        ("Area_Type_Industrial", 1.0),
        ("Area_Type_Residential", 0.0),
    ];

    #[test]
    fn test_from_values_carries_layout() {
        let vector = FeatureVector::from_values([1.0; FEATURE_COUNT]);
        assert_eq!(vector.version, FEATURE_VERSION);
        assert_eq!(vector.layout_hash, layout_hash());
        assert!(vector.is_compatible());
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = FeatureVector::from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, GridGuardError::SchemaMismatch(_)));

        let err = FeatureVector::try_from(vec![0.0; FEATURE_COUNT + 1]).unwrap_err();
        assert!(matches!(err, GridGuardError::SchemaMismatch(_)));
    }

    #[test]
    fn test_from_columns_any_order() {
        let mut shuffled = COLUMNS;
        shuffled.reverse();
        let vector = FeatureVector::from_columns(&shuffled).unwrap();
        assert_eq!(vector.values, [15.0, 18.5, 34.0, 850.0, 1.0, 0.0]);
    }

    #[test]
    fn test_from_columns_missing_is_error() {
        // get_dummies(drop_first=True) on a single Commercial row drops both
        // indicator columns; this must not silently become zeros.
        let err = FeatureVector::from_columns(&COLUMNS[..4]).unwrap_err();
        match err {
            GridGuardError::SchemaMismatch(msg) => {
                assert!(msg.contains("Area_Type_Industrial"));
                assert!(msg.contains("Area_Type_Residential"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_columns_unknown_and_duplicate() {
        let mut extra = COLUMNS.to_vec();
        extra.push(("Area_Type_Agricultural", 1.0));
        assert!(matches!(
            FeatureVector::from_columns(&extra),
            Err(GridGuardError::SchemaMismatch(_))
        ));

        let mut dup = COLUMNS.to_vec();
        dup.push(("Consumers", 900.0));
        assert!(matches!(
            FeatureVector::from_columns(&dup),
            Err(GridGuardError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_tampered_layout_fails_validation() {
        let mut vector = FeatureVector::from_values([0.5; FEATURE_COUNT]);
        vector.layout_hash ^= 0xffff;
        assert!(!vector.is_compatible());
    }

    #[test]
    fn test_get_by_name_and_log_entry() {
        let vector = FeatureVector::from_columns(&COLUMNS).unwrap();
        assert_eq!(vector.get_by_name("Consumers"), Some(850.0));
        assert_eq!(vector.get_by_name("nonexistent"), None);

        let log = vector.to_log_entry();
        assert_eq!(log["feature_version"], FEATURE_VERSION);
        assert_eq!(log["named_values"]["Current_Load_MW"], 18.5);
    }
}
