//! The metrics table: five named values derived from one reading.
//!
//! Every chart and KPI card draws from this table, so its shape is load
//! bearing: exactly [`METRIC_COUNT`] entries, always in [`MetricName`]
//! declaration order. Renderers may rely on positional correspondence.

use serde::Serialize;

use crate::model::{DisplayUnit, WeatherReading};
use crate::units::normalize;

/// Number of entries in every [`MetricsRow`].
pub const METRIC_COUNT: usize = 5;

/// The five dashboard metrics, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricName {
    Temperature,
    FeelsLike,
    Humidity,
    Pressure,
    WindSpeed,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::Temperature => "Temperature",
            MetricName::FeelsLike => "Feels Like",
            MetricName::Humidity => "Humidity",
            MetricName::Pressure => "Pressure",
            MetricName::WindSpeed => "Wind Speed",
        }
    }

    pub const fn all() -> [MetricName; METRIC_COUNT] {
        [
            MetricName::Temperature,
            MetricName::FeelsLike,
            MetricName::Humidity,
            MetricName::Pressure,
            MetricName::WindSpeed,
        ]
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed-order table of (metric, value) pairs for one render pass.
///
/// Built fresh from a reading on every interaction and never mutated
/// afterwards; the entries slice is read-only.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsRow {
    entries: [(MetricName, f64); METRIC_COUNT],
}

impl MetricsRow {
    /// Assemble the table from a reading, converting the two temperature
    /// fields into the requested display unit. The remaining metrics pass
    /// through unchanged.
    pub fn build(reading: &WeatherReading, unit: DisplayUnit) -> Self {
        Self {
            entries: [
                (MetricName::Temperature, normalize(reading.temperature_c, unit)),
                (MetricName::FeelsLike, normalize(reading.feels_like_c, unit)),
                (MetricName::Humidity, f64::from(reading.humidity_pct)),
                (MetricName::Pressure, f64::from(reading.pressure_hpa)),
                (MetricName::WindSpeed, reading.wind_speed_mps),
            ],
        }
    }

    pub fn entries(&self) -> &[(MetricName, f64); METRIC_COUNT] {
        &self.entries
    }

    /// Value for one metric. The table always contains all five.
    pub fn value(&self, name: MetricName) -> f64 {
        // entries are in MetricName declaration order
        self.entries[name as usize].1
    }

    pub fn values(&self) -> [f64; METRIC_COUNT] {
        self.entries.map(|(_, v)| v)
    }

    pub fn labels() -> [&'static str; METRIC_COUNT] {
        MetricName::all().map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reading() -> WeatherReading {
        WeatherReading {
            city: "Chennai".into(),
            temperature_c: 20.0,
            feels_like_c: 18.0,
            humidity_pct: 60,
            pressure_hpa: 1013,
            wind_speed_mps: 3.5,
            latitude: 13.08,
            longitude: 80.27,
            sunrise_epoch: 1_700_000_000,
            sunset_epoch: 1_700_040_000,
        }
    }

    #[test]
    fn row_is_always_five_pairs_in_fixed_order() {
        let row = MetricsRow::build(&sample_reading(), DisplayUnit::Celsius);

        let names: Vec<MetricName> = row.entries().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, MetricName::all().to_vec());
        assert_eq!(row.entries().len(), METRIC_COUNT);
    }

    #[test]
    fn celsius_row_passes_values_through() {
        let row = MetricsRow::build(&sample_reading(), DisplayUnit::Celsius);
        assert_eq!(row.values(), [20.0, 18.0, 60.0, 1013.0, 3.5]);
    }

    #[test]
    fn fahrenheit_row_converts_only_the_temperatures() {
        let row = MetricsRow::build(&sample_reading(), DisplayUnit::Fahrenheit);

        let values = row.values();
        assert_eq!(values[0], 68.0);
        assert!((values[1] - 64.4).abs() < 1e-9);
        assert_eq!(&values[2..], &[60.0, 1013.0, 3.5]);
    }

    #[test]
    fn value_lookup_matches_position() {
        let row = MetricsRow::build(&sample_reading(), DisplayUnit::Celsius);
        assert_eq!(row.value(MetricName::Humidity), 60.0);
        assert_eq!(row.value(MetricName::WindSpeed), 3.5);
    }

    #[test]
    fn labels_match_display_names() {
        assert_eq!(
            MetricsRow::labels(),
            ["Temperature", "Feels Like", "Humidity", "Pressure", "Wind Speed"]
        );
    }
}
