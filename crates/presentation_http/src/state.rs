//! Application state shared across handlers

use std::sync::Arc;

use integration_openweather::CurrentWeather;

/// Shared application state
///
/// Holds no mutable data; every request reads the same provider handle and
/// location, so concurrent requests need no coordination.
#[derive(Clone)]
pub struct AppState {
    /// Weather provider used to fetch readings
    pub weather: Arc<dyn CurrentWeather>,
    /// Location queried for every request
    pub location: String,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("weather", &"<CurrentWeather>")
            .field("location", &self.location)
            .finish()
    }
}
