//! Open-Meteo MCP Server
//!
//! Exposes a single tool, `get_current_weather`, that resolves a place name
//! with the Open-Meteo geocoding API and then fetches its current
//! conditions from the Open-Meteo forecast API.

pub mod client;
pub mod config;
pub mod error;
pub mod forecast;
pub mod geocode;
pub mod model;
pub mod orchestrator;
pub mod server;
pub mod weather_code;

pub use client::OpenMeteoClient;
pub use config::{Config, ConfigError};
pub use error::{Api, WeatherError};
pub use model::{ErrorResult, GeocodedPlace, LocationQuery, WeatherOutcome, WeatherReport};
pub use orchestrator::{get_current_weather, lookup, WeatherStages};
pub use server::WeatherMcpServer;
