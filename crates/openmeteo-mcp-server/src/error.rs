//! Failure taxonomy for a single weather lookup.
//!
//! Every variant renders to the exact message a caller sees in the
//! `{"error": ...}` result; none of them abort the process.

use std::fmt;

/// Which upstream service a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Geocoding,
    Weather,
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Geocoding => write!(f, "Geocoding API"),
            Self::Weather => write!(f, "Weather API"),
        }
    }
}

/// Errors produced by the geocode and forecast stages.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Location must not be empty.")]
    EmptyLocation,

    /// The geocoder returned no match. Expected outcome, not a fault.
    #[error("Could not find location: {location}")]
    NotFound { location: String },

    /// Upstream answered with a non-2xx status.
    #[error("{api} error: {status} - {body}")]
    UpstreamStatus { api: Api, status: u16, body: String },

    /// Connection, timeout, or an unreadable response body.
    #[error("Failed to connect to {api}: {message}")]
    Transport { api: Api, message: String },

    /// Forecast response had no `current_weather` section.
    #[error("Could not retrieve current weather data.")]
    MissingData,
}

impl WeatherError {
    pub fn transport(api: Api, err: impl fmt::Display) -> Self {
        Self::Transport {
            api,
            message: err.to_string(),
        }
    }

    /// Upstream the error is attributed to, if any.
    pub fn api(&self) -> Option<Api> {
        match self {
            Self::UpstreamStatus { api, .. } | Self::Transport { api, .. } => Some(*api),
            Self::MissingData => Some(Api::Weather),
            Self::NotFound { .. } => Some(Api::Geocoding),
            Self::EmptyLocation => None,
        }
    }
}
