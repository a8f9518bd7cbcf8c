use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::DashboardError, model::WeatherReading};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Client for the OpenWeatherMap current-conditions endpoint.
///
/// Requests metric units so the reading is always stored in Celsius;
/// display-unit conversion happens downstream.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different host, e.g. a mock server in tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn fetch_current(&self, city: &str) -> Result<WeatherReading, DashboardError> {
        let url = format!("{}/weather", self.base_url);

        tracing::debug!(city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await
            .map_err(|e| DashboardError::ProviderUnavailable {
                status: None,
                detail: e.to_string(),
            })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| DashboardError::ProviderUnavailable {
                status: Some(status.as_u16()),
                detail: e.to_string(),
            })?;

        if !status.is_success() {
            tracing::warn!(%status, "current weather request failed");
            return Err(DashboardError::ProviderUnavailable {
                status: Some(status.as_u16()),
                detail: truncate_body(&body),
            });
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_reading(city)
    }
}

// Mirror of the provider JSON. Leaves are optional so a missing field
// surfaces as DataUnavailable rather than a blanket decode error.

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: Option<f64>,
    feels_like: Option<f64>,
    humidity: Option<u8>,
    pressure: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: Option<f64>,
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: Option<String>,
    main: Option<OwMain>,
    wind: Option<OwWind>,
    coord: Option<OwCoord>,
    sys: Option<OwSys>,
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, DashboardError> {
    value.ok_or(DashboardError::DataUnavailable { field })
}

impl OwCurrentResponse {
    /// Validate every required field up front. Downstream code only ever
    /// sees a complete reading or no reading at all.
    fn into_reading(self, requested_city: &str) -> Result<WeatherReading, DashboardError> {
        let main = require("main", self.main)?;
        let wind = require("wind", self.wind)?;
        let coord = require("coord", self.coord)?;
        let sys = require("sys", self.sys)?;

        Ok(WeatherReading {
            city: self
                .name
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| requested_city.to_string()),
            temperature_c: require("main.temp", main.temp)?,
            feels_like_c: require("main.feels_like", main.feels_like)?,
            humidity_pct: require("main.humidity", main.humidity)?,
            pressure_hpa: require("main.pressure", main.pressure)?,
            wind_speed_mps: require("wind.speed", wind.speed)?,
            latitude: require("coord.lat", coord.lat)?,
            longitude: require("coord.lon", coord.lon)?,
            sunrise_epoch: require("sys.sunrise", sys.sunrise)?,
            sunset_epoch: require("sys.sunset", sys.sunset)?,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // cut must land on a char boundary
        let cut = (0..=MAX).rev().find(|&i| body.is_char_boundary(i)).unwrap_or(0);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
