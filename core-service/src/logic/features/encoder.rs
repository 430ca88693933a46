//! Feature Encoder
//!
//! InputRecord → named columns → FeatureVector.
//!
//! The record is first expanded into named training columns (one-hot for
//! the area type, Commercial dropped as reference), then placed into layout
//! order through `FeatureVector::from_columns`, which rejects anything
//! missing or unexpected.

use super::input::{AreaType, InputRecord};
use super::layout::{FEATURE_COUNT, FEATURE_LAYOUT};
use super::vector::FeatureVector;
use crate::error::Result;

/// Expand a record into (column, value) pairs named as at training time
pub fn to_columns(record: &InputRecord) -> [(&'static str, f32); FEATURE_COUNT] {
    let (is_industrial, is_residential) = record.area_type.indicators();

    [
        (FEATURE_LAYOUT[0], f32::from(record.time_hour)),
        (FEATURE_LAYOUT[1], record.current_load_mw as f32),
        (FEATURE_LAYOUT[2], record.temperature_c as f32),
        (FEATURE_LAYOUT[3], record.consumers as f32),
        (FEATURE_LAYOUT[4], is_industrial),
        (FEATURE_LAYOUT[5], is_residential),
    ]
}

/// Encode a record into the fixed-order vector the model expects
pub fn encode(record: &InputRecord) -> Result<FeatureVector> {
    let vector = FeatureVector::from_columns(&to_columns(record))?;
    log::debug!(
        "Encoded {} record: {:?}",
        record.area_type,
        vector.values
    );
    Ok(vector)
}

/// Encode from loose values with the area type still as text
pub fn encode_raw(
    time_hour: u8,
    current_load_mw: f64,
    temperature_c: f64,
    area_type: &str,
    consumers: u32,
) -> Result<FeatureVector> {
    let area_type: AreaType = area_type.parse()?;
    encode(&InputRecord {
        time_hour,
        current_load_mw,
        temperature_c,
        area_type,
        consumers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GridGuardError;
    use crate::logic::features::layout::{IDX_IS_INDUSTRIAL, IDX_IS_RESIDENTIAL};

    fn record(area_type: AreaType) -> InputRecord {
        InputRecord {
            time_hour: 15,
            current_load_mw: 18.5,
            temperature_c: 34.0,
            area_type,
            consumers: 850,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let vector = encode(&record(AreaType::Industrial)).unwrap();
        assert_eq!(vector.values, [15.0, 18.5, 34.0, 850.0, 1.0, 0.0]);
    }

    #[test]
    fn test_one_hot_per_category() {
        let industrial = encode(&record(AreaType::Industrial)).unwrap();
        assert_eq!(industrial.values[IDX_IS_INDUSTRIAL], 1.0);
        assert_eq!(industrial.values[IDX_IS_RESIDENTIAL], 0.0);

        let residential = encode(&record(AreaType::Residential)).unwrap();
        assert_eq!(residential.values[IDX_IS_INDUSTRIAL], 0.0);
        assert_eq!(residential.values[IDX_IS_RESIDENTIAL], 1.0);

        let commercial = encode(&record(AreaType::Commercial)).unwrap();
        assert_eq!(commercial.values[IDX_IS_INDUSTRIAL], 0.0);
        assert_eq!(commercial.values[IDX_IS_RESIDENTIAL], 0.0);
    }

    #[test]
    fn test_encode_raw_unknown_category() {
        let err = encode_raw(15, 18.5, 34.0, "Agricultural", 850).unwrap_err();
        assert_eq!(err, GridGuardError::UnknownCategory("Agricultural".to_string()));
    }

    #[test]
    fn test_encode_raw_matches_encode() {
        let raw = encode_raw(15, 18.5, 34.0, "Residential", 850).unwrap();
        let typed = encode(&record(AreaType::Residential)).unwrap();
        assert_eq!(raw, typed);
    }
}
