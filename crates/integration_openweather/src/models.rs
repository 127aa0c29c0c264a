//! Weather data models
//!
//! Typed representation of the OpenWeatherMap current-weather payload and
//! the minimal reading extracted from it.

use serde::{Deserialize, Serialize};

/// Minimal weather record derived from a provider response
///
/// Temperature stays in the provider's native unit (Kelvin unless the
/// request asks otherwise); it is never converted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature as reported by the provider
    pub temperature: f64,
    /// Short condition text, e.g. "clear sky"
    pub description: String,
}

/// Top-level provider payload
///
/// Only the fields the relay extracts are modelled; everything else the
/// provider sends is ignored.
#[derive(Debug, Deserialize)]
pub(crate) struct ProviderPayload {
    pub weather: Vec<ConditionEntry>,
    pub main: MainMeasurements,
}

/// One entry of the provider's `weather` list
#[derive(Debug, Deserialize)]
pub(crate) struct ConditionEntry {
    pub description: String,
}

/// The provider's `main` measurement block
#[derive(Debug, Deserialize)]
pub(crate) struct MainMeasurements {
    pub temp: f64,
}

impl ProviderPayload {
    /// Extract the reading, consuming the payload
    ///
    /// Returns `None` when the `weather` list is empty.
    pub(crate) fn into_reading(mut self) -> Option<WeatherReading> {
        if self.weather.is_empty() {
            return None;
        }
        let entry = self.weather.swap_remove(0);
        Some(WeatherReading {
            temperature: self.main.temp,
            description: entry.description,
        })
    }
}
