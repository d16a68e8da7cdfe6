//! Values that live for the duration of one `get_current_weather` call.

use serde::Serialize;

use crate::error::WeatherError;

/// Unit requested from the forecast upstream for temperatures.
pub const TEMPERATURE_UNIT: &str = "fahrenheit";

/// Unit requested from the forecast upstream for wind speed.
pub const WIND_SPEED_UNIT: &str = "mph";

/// Free-text place name supplied by the caller, forwarded verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Only the empty string is rejected; whitespace and casing are kept as-is.
    pub fn new(raw: impl Into<String>) -> Result<Self, WeatherError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(WeatherError::EmptyLocation);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// First geocoder match for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedPlace {
    pub canonical_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Normalized current conditions for a place.
///
/// Missing temperature or wind readings are `NaN`, which serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub temperature: f64,
    pub temperature_unit: String,
    pub weather_description: String,
    pub wind_speed: f64,
    pub wind_speed_unit: String,
}

/// Error shape returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
}

impl From<&WeatherError> for ErrorResult {
    fn from(err: &WeatherError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

/// Result of one tool call: exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum WeatherOutcome {
    Report(WeatherReport),
    Error(ErrorResult),
}

impl WeatherOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// JSON text handed back through the tool boundary.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| {
            format!("{{\"error\": \"Failed to serialize weather result: {}\"}}", e)
        })
    }
}

impl From<Result<WeatherReport, WeatherError>> for WeatherOutcome {
    fn from(result: Result<WeatherReport, WeatherError>) -> Self {
        match result {
            Ok(report) => Self::Report(report),
            Err(err) => Self::Error(ErrorResult::from(&err)),
        }
    }
}
