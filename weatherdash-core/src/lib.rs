//! Core library for the `weatherdash` terminal dashboard.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeatherMap client behind a provider trait
//! - The domain model, unit normalizer and fixed-order metrics table
//! - The per-interaction view model and chart data
//!
//! It is used by `weatherdash-cli`, but can also be reused by other binaries or services.
//!
//! The pipeline is a single forward pass per interaction:
//! selection → fetch → normalize → metrics table → view model. Nothing is
//! cached or carried over between interactions.

pub mod chart;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod provider;
pub mod units;
pub mod view;

pub use chart::{ChartData, ChartKind, ChartPanel};
pub use config::Config;
pub use error::DashboardError;
pub use metrics::{MetricName, MetricsRow};
pub use model::{CITY_CHOICES, DisplayUnit, Selection, Theme, WeatherReading};
pub use provider::{WeatherProvider, provider_from_config};
pub use view::{KpiCard, Palette, ViewModel};
