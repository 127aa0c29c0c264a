//! API error handling
//!
//! Every client-layer failure maps to a single generic 500 with a fixed
//! message. The distinct error kinds are logged server-side; callers never
//! see which one occurred.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use integration_openweather::WeatherError;
use thiserror::Error;
use tracing::warn;

/// Fixed body returned for any upstream failure
pub const FETCH_FAILURE_MESSAGE: &str = "Error fetching weather data";

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// The weather provider call failed
    #[error("upstream weather fetch failed: {0}")]
    Upstream(#[from] WeatherError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::Upstream(err) => {
                warn!(error = %err, "Weather fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, FETCH_FAILURE_MESSAGE).into_response()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_error_message() {
        let err = ApiError::Upstream(WeatherError::UpstreamStatus(502));
        assert_eq!(
            err.to_string(),
            "upstream weather fetch failed: provider returned HTTP 502"
        );
    }

    #[test]
    fn weather_error_converts() {
        let err: ApiError = WeatherError::Decode("bad json".to_string()).into();
        assert!(matches!(err, ApiError::Upstream(WeatherError::Decode(_))));
    }

    #[test]
    fn into_response_is_internal_server_error() {
        let err = ApiError::Upstream(WeatherError::Transport("connection refused".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn all_error_kinds_map_to_internal_server_error() {
        let kinds = [
            WeatherError::Transport("refused".to_string()),
            WeatherError::UpstreamStatus(401),
            WeatherError::Decode("not json".to_string()),
            WeatherError::Shape("missing main".to_string()),
        ];
        for kind in kinds {
            let response = ApiError::Upstream(kind).into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn api_error_has_debug() {
        let err = ApiError::Upstream(WeatherError::UpstreamStatus(500));
        let debug = format!("{err:?}");
        assert!(debug.contains("Upstream"));
    }
}
