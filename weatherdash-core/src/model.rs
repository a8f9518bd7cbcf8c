use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

/// City choices offered by the interactive selector. Free-text city names
/// are also accepted everywhere a city is taken.
pub const CITY_CHOICES: &[&str] = &["Chennai", "Bangalore", "Delhi", "Mumbai", "Hyderabad"];

/// One current-conditions observation, always stored in Celsius.
///
/// Built once per interaction, consumed by a single render pass, then
/// discarded. Nothing is cached between interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_pct: u8,
    pub pressure_hpa: u32,
    pub wind_speed_mps: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub sunrise_epoch: i64,
    pub sunset_epoch: i64,
}

impl WeatherReading {
    /// Sunrise as a `HH:MM` UTC string, if the epoch is representable.
    pub fn sunrise_hm(&self) -> Option<String> {
        format_unix_hm(self.sunrise_epoch)
    }

    /// Sunset as a `HH:MM` UTC string, if the epoch is representable.
    pub fn sunset_hm(&self) -> Option<String> {
        format_unix_hm(self.sunset_epoch)
    }
}

/// Temperature unit chosen per request. Affects presentation only; the
/// underlying reading stays in Celsius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "celsius",
            DisplayUnit::Fahrenheit => "fahrenheit",
        }
    }

    /// Degree suffix for display, e.g. on KPI cards.
    pub fn suffix(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "°C",
            DisplayUnit::Fahrenheit => "°F",
        }
    }

    pub const fn all() -> &'static [DisplayUnit] {
        &[DisplayUnit::Celsius, DisplayUnit::Fahrenheit]
    }
}

impl std::fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DisplayUnit {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "c" | "celsius" => Ok(DisplayUnit::Celsius),
            "f" | "fahrenheit" => Ok(DisplayUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown temperature unit '{value}'. Supported units: celsius (c), fahrenheit (f)."
            )),
        }
    }
}

/// Chart theme selector value. Carried through to the view model but it
/// does not alter any metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub const fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Theme {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow::anyhow!(
                "Unknown theme '{value}'. Supported themes: light, dark."
            )),
        }
    }
}

/// The three inbound selector values of one interaction.
#[derive(Debug, Clone)]
pub struct Selection {
    pub city: String,
    pub unit: DisplayUnit,
    pub theme: Theme,
}

/// Format Unix seconds as a locale-independent `HH:MM` string in UTC.
///
/// Returns `None` only for epochs outside the representable range.
pub fn format_unix_hm(epoch: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch, 0).map(|dt| dt.format("%H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_as_str_roundtrip() {
        for unit in DisplayUnit::all() {
            let parsed = DisplayUnit::try_from(unit.as_str()).expect("roundtrip should succeed");
            assert_eq!(*unit, parsed);
        }
    }

    #[test]
    fn unit_accepts_short_forms() {
        assert_eq!(DisplayUnit::try_from("C").unwrap(), DisplayUnit::Celsius);
        assert_eq!(DisplayUnit::try_from("f").unwrap(), DisplayUnit::Fahrenheit);
    }

    #[test]
    fn unknown_unit_error() {
        let err = DisplayUnit::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown temperature unit"));
    }

    #[test]
    fn theme_as_str_roundtrip() {
        for theme in Theme::all() {
            let parsed = Theme::try_from(theme.as_str()).expect("roundtrip should succeed");
            assert_eq!(*theme, parsed);
        }
    }

    #[test]
    fn format_unix_hm_is_deterministic_utc() {
        assert_eq!(format_unix_hm(1_700_000_000).as_deref(), Some("22:13"));
        assert_eq!(format_unix_hm(0).as_deref(), Some("00:00"));
    }

    #[test]
    fn sun_times_come_from_the_reading_epochs() {
        let reading = WeatherReading {
            city: "Chennai".into(),
            temperature_c: 30.0,
            feels_like_c: 33.0,
            humidity_pct: 70,
            pressure_hpa: 1008,
            wind_speed_mps: 4.2,
            latitude: 13.08,
            longitude: 80.27,
            sunrise_epoch: 1_700_000_000,
            sunset_epoch: 1_700_040_000,
        };

        assert_eq!(reading.sunrise_hm().as_deref(), Some("22:13"));
        assert_eq!(reading.sunset_hm().as_deref(), Some("09:20"));
    }
}
