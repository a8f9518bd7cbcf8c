//! The per-interaction view model.
//!
//! [`ViewModel::compose`] is a pure function from one reading plus the
//! selector values to everything a renderer needs. There is no hidden
//! rerun state: every interaction rebuilds the whole thing from scratch.

use serde::Serialize;

use crate::chart::{ChartPanel, panels};
use crate::metrics::{METRIC_COUNT, MetricsRow};
use crate::model::{DisplayUnit, Selection, Theme, WeatherReading};
use crate::units::normalize;

/// A single-value summary tile.
#[derive(Debug, Clone, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    /// Display value, already unit-converted and rounded.
    pub value: f64,
    pub suffix: &'static str,
    /// Card background, as a hex color for the theme palette.
    pub color: &'static str,
}

/// Typed theme object consumed by the presentation layer. Replaces any
/// notion of injected style strings.
#[derive(Debug, Clone, Serialize)]
pub struct Palette {
    /// Page background, picked from the local hour band.
    pub background: &'static str,
    /// Card colors in KPI display order.
    pub cards: [&'static str; METRIC_COUNT],
    pub sun_card: &'static str,
}

impl Palette {
    /// Background by time of day: morning, afternoon, evening, night.
    pub fn for_hour(hour: u32) -> Self {
        let background = match hour {
            5..=11 => "#E3F2FD",
            12..=16 => "#FFF8E1",
            17..=19 => "#FFE0B2",
            _ => "#263238",
        };

        Self {
            background,
            cards: ["#ef5350", "#ab47bc", "#26a69a", "#42a5f5", "#ffa726"],
            sun_card: "#ffb300",
        }
    }
}

/// Everything one render pass needs. Built fresh per interaction,
/// consumed read-only, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct ViewModel {
    pub city: String,
    pub unit: DisplayUnit,
    pub theme: Theme,
    pub palette: Palette,
    pub cards: [KpiCard; METRIC_COUNT],
    /// Map pin position: (latitude, longitude).
    pub pin: (f64, f64),
    pub sunrise: String,
    pub sunset: String,
    pub metrics: MetricsRow,
    pub panels: Vec<ChartPanel>,
}

impl ViewModel {
    /// Compose the view model for one interaction. `local_hour` (0-23)
    /// only picks the background band.
    pub fn compose(reading: &WeatherReading, selection: &Selection, local_hour: u32) -> Self {
        let metrics = MetricsRow::build(reading, selection.unit);
        let palette = Palette::for_hour(local_hour);

        // KPI display order differs from table order: wind before pressure.
        let cards = [
            KpiCard {
                label: "Temperature",
                value: round1(normalize(reading.temperature_c, selection.unit)),
                suffix: selection.unit.suffix(),
                color: palette.cards[0],
            },
            KpiCard {
                label: "Feels Like",
                value: round1(normalize(reading.feels_like_c, selection.unit)),
                suffix: selection.unit.suffix(),
                color: palette.cards[1],
            },
            KpiCard {
                label: "Humidity",
                value: f64::from(reading.humidity_pct),
                suffix: "%",
                color: palette.cards[2],
            },
            KpiCard {
                label: "Wind",
                value: reading.wind_speed_mps,
                suffix: " m/s",
                color: palette.cards[3],
            },
            KpiCard {
                label: "Pressure",
                value: f64::from(reading.pressure_hpa),
                suffix: " hPa",
                color: palette.cards[4],
            },
        ];

        let panels = panels(&metrics);

        Self {
            city: reading.city.clone(),
            unit: selection.unit,
            theme: selection.theme,
            palette,
            cards,
            pin: (reading.latitude, reading.longitude),
            sunrise: reading.sunrise_hm().unwrap_or_else(|| "--:--".to_string()),
            sunset: reading.sunset_hm().unwrap_or_else(|| "--:--".to_string()),
            metrics,
            panels,
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
