//! Temperature unit normalization.
//!
//! Readings are stored in Celsius; conversion happens once, at table-build
//! time. Rounding is a display concern and does not happen here.

use crate::model::DisplayUnit;

/// Convert a Celsius value into the requested display unit.
pub fn normalize(celsius: f64, unit: DisplayUnit) -> f64 {
    match unit {
        DisplayUnit::Celsius => celsius,
        DisplayUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
    }
}
