//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap current-weather API
//! (<https://openweathermap.org/current>). Fetches conditions for a single
//! location and extracts the minimal reading the relay re-serves.

pub mod client;
mod models;

pub use client::{CurrentWeather, OpenWeatherClient, WeatherConfig, WeatherError};
pub use models::WeatherReading;
