//! Weather relay handler

use axum::{Json, extract::State};
use integration_openweather::WeatherReading;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Relay the current weather for the configured location
///
/// GET /weather
///
/// Success is the serialized reading with a 200 and an
/// `application/json` content type; any provider failure becomes a
/// generic 500 via [`ApiError`].
#[instrument(skip_all, fields(location = %state.location))]
pub async fn current_weather(
    State(state): State<AppState>,
) -> Result<Json<WeatherReading>, ApiError> {
    let reading = state.weather.fetch_current(&state.location).await?;
    Ok(Json(reading))
}
