//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current-weather endpoint.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ProviderPayload, WeatherReading};

/// Weather client errors
///
/// One variant per failure kind, so callers can tell a dead network from a
/// provider that answered with garbage. The provider payload shape is not
/// guaranteed; an unexpected shape is an error, never a panic.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection or transport failure reaching the provider
    #[error("transport failure: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("provider returned HTTP {0}")]
    UpstreamStatus(u16),

    /// Response body is not valid JSON
    #[error("response body is not valid JSON: {0}")]
    Decode(String),

    /// Valid JSON that lacks the expected fields or types
    #[error("unexpected response shape: {0}")]
    Shape(String),
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Location queried for every reading, e.g. "Toronto"
    #[serde(default = "default_location")]
    pub location: String,

    /// API key for the provider (sensitive - uses `SecretString`)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_location() -> String {
    "Toronto".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            location: default_location(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("location", &self.location)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Current-weather provider trait
///
/// The seam the HTTP layer mocks in tests.
#[async_trait]
pub trait CurrentWeather: Send + Sync {
    /// Fetch the current weather reading for a location
    async fn fetch_current(&self, location: &str) -> Result<WeatherReading, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The current-weather endpoint URL, without query parameters
    fn current_weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url)
    }

    /// Decode a provider body into a reading
    ///
    /// Two-step decode keeps the error taxonomy honest: a body that is not
    /// JSON at all is a [`WeatherError::Decode`], valid JSON with the wrong
    /// shape is a [`WeatherError::Shape`].
    fn decode_body(body: &str) -> Result<WeatherReading, WeatherError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|e| WeatherError::Decode(e.to_string()))?;

        let payload: ProviderPayload =
            serde_json::from_value(value).map_err(|e| WeatherError::Shape(e.to_string()))?;

        payload
            .into_reading()
            .ok_or_else(|| WeatherError::Shape("weather list is empty".to_string()))
    }
}

#[async_trait]
impl CurrentWeather for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn fetch_current(&self, location: &str) -> Result<WeatherReading, WeatherError> {
        let url = self.current_weather_url();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("q", location), ("appid", self.config.api_key.expose_secret())])
            .send()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::Transport(e.to_string()))?;

        Self::decode_body(&body)
    }
}
