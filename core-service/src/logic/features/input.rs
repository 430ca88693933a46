//! Input Record - one transformer telemetry observation
//!
//! Ranges are enforced by whoever collects the values (form widgets,
//! HTTP validation). This module only owns the shape and the category.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GridGuardError;

// Widget ranges. Collectors enforce these; the encoder does not.
pub const TIME_HOUR_MAX: u8 = 23;
pub const CURRENT_LOAD_MIN_MW: f64 = 0.0;
pub const CURRENT_LOAD_MAX_MW: f64 = 30.0;
pub const TEMPERATURE_MIN_C: f64 = 10.0;
pub const TEMPERATURE_MAX_C: f64 = 45.0;
pub const CONSUMERS_MIN: u32 = 10;
pub const CONSUMERS_MAX: u32 = 5000;

/// Area served by the transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AreaType {
    Residential,
    Commercial,
    Industrial,
}

impl AreaType {
    /// All categories in the order the dashboard offers them
    pub const ALL: [AreaType; 3] = [
        AreaType::Residential,
        AreaType::Commercial,
        AreaType::Industrial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AreaType::Residential => "Residential",
            AreaType::Commercial => "Commercial",
            AreaType::Industrial => "Industrial",
        }
    }

    /// (is_industrial, is_residential). Commercial is the dropped reference
    /// category and encodes as all-zero.
    pub fn indicators(&self) -> (f32, f32) {
        match self {
            AreaType::Industrial => (1.0, 0.0),
            AreaType::Residential => (0.0, 1.0),
            AreaType::Commercial => (0.0, 0.0),
        }
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AreaType {
    type Err = GridGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AreaType::ALL
            .into_iter()
            .find(|a| a.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GridGuardError::UnknownCategory(trimmed.to_string()))
    }
}

/// Raw observation as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    /// Hour of day, 0-23
    pub time_hour: u8,
    /// Current load, 0-30 MW
    pub current_load_mw: f64,
    /// Ambient temperature, 10-45 °C
    pub temperature_c: f64,
    pub area_type: AreaType,
    /// Connected consumers, 10-5000
    pub consumers: u32,
}

impl InputRecord {
    /// Same observation at a different temperature
    pub fn with_temperature(&self, temperature_c: f64) -> Self {
        Self {
            temperature_c,
            ..*self
        }
    }
}

impl Default for InputRecord {
    /// Dashboard defaults
    fn default() -> Self {
        Self {
            time_hour: 15,
            current_load_mw: 18.5,
            temperature_c: 34.0,
            area_type: AreaType::Residential,
            consumers: 850,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_type_parse() {
        assert_eq!("Industrial".parse::<AreaType>().unwrap(), AreaType::Industrial);
        assert_eq!(" residential ".parse::<AreaType>().unwrap(), AreaType::Residential);
        assert_eq!("COMMERCIAL".parse::<AreaType>().unwrap(), AreaType::Commercial);
    }

    #[test]
    fn test_area_type_unknown() {
        let err = "Agricultural".parse::<AreaType>().unwrap_err();
        assert_eq!(err, GridGuardError::UnknownCategory("Agricultural".to_string()));

        assert!("".parse::<AreaType>().is_err());
    }

    #[test]
    fn test_indicators() {
        assert_eq!(AreaType::Industrial.indicators(), (1.0, 0.0));
        assert_eq!(AreaType::Residential.indicators(), (0.0, 1.0));
        assert_eq!(AreaType::Commercial.indicators(), (0.0, 0.0));
    }

    #[test]
    fn test_with_temperature_keeps_other_fields() {
        let record = InputRecord::default();
        let hot = record.with_temperature(44.0);
        assert_eq!(hot.temperature_c, 44.0);
        assert_eq!(hot.consumers, record.consumers);
        assert_eq!(hot.area_type, record.area_type);
    }
}
