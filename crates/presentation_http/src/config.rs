//! Application configuration
//!
//! Layered the same way everywhere: serde defaults, then an optional
//! `config` file, then `WEATHERRELAY_`-prefixed environment variables.
//! Nested keys use a double underscore, e.g. `WEATHERRELAY_SERVER__PORT`
//! or `WEATHERRELAY_WEATHER__API_KEY`.

use integration_openweather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default)]
    pub shutdown_timeout_secs: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8082
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: Some(30),
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider settings
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a present config source cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_env(Self::environment())
    }

    /// The process environment source
    ///
    /// The prefix is joined with a single underscore; nested keys use a
    /// double underscore so two-word field names stay addressable
    /// (`WEATHERRELAY_WEATHER__API_KEY` reaches `weather.api_key`).
    fn environment() -> config::Environment {
        config::Environment::with_prefix("WEATHERRELAY")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn load_with_env(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables (e.g., WEATHERRELAY_SERVER__PORT)
            .add_source(env);

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    /// Environment source fed from a fixed map instead of the process env,
    /// so tests stay independent of each other
    fn env_source(vars: &[(&str, &str)]) -> config::Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    #[test]
    fn env_vars_override_defaults() {
        let config = AppConfig::load_with_env(env_source(&[
            ("WEATHERRELAY_SERVER__PORT", "9999"),
            ("WEATHERRELAY_WEATHER__API_KEY", "env-key"),
            ("WEATHERRELAY_WEATHER__LOCATION", "Berlin"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.weather.api_key.expose_secret(), "env-key");
        assert_eq!(config.weather.location, "Berlin");
    }

    #[test]
    fn unprefixed_env_vars_are_ignored() {
        let config = AppConfig::load_with_env(env_source(&[
            ("SERVER__PORT", "9999"),
            ("WEATHER__API_KEY", "env-key"),
        ]))
        .unwrap();

        assert_eq!(config.server.port, 8082);
        assert!(config.weather.api_key.expose_secret().is_empty());
    }

    #[test]
    fn server_config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8082);
        assert_eq!(config.shutdown_timeout_secs, Some(30));
    }

    #[test]
    fn app_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.weather.location, "Toronto");
    }

    #[test]
    fn app_config_deserializes_partial_toml() {
        let toml = r#"
            [server]
            port = 9090

            [weather]
            location = "Berlin"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.weather.location, "Berlin");
        assert_eq!(config.weather.timeout_secs, 30);
    }

    #[test]
    fn app_config_deserializes_empty_input() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.weather.base_url.is_empty());
    }
}
