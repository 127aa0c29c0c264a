//! weather-relay HTTP presentation layer
//!
//! This crate provides the HTTP surface for weather-relay: one route that
//! relays the configured location's current weather.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use config::{AppConfig, ServerConfig};
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
