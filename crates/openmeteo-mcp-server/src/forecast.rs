//! Forecast Fetcher stage: coordinates → current conditions.

use serde::Deserialize;

use crate::error::{Api, WeatherError};
use crate::model::{GeocodedPlace, WeatherReport, TEMPERATURE_UNIT, WIND_SPEED_UNIT};
use crate::weather_code;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
    #[serde(default)]
    current_weather_units: Option<CurrentWeatherUnits>,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    #[serde(default)]
    temperature: Option<f64>,
    #[serde(default)]
    windspeed: Option<f64>,
    #[serde(default)]
    weathercode: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct CurrentWeatherUnits {
    #[serde(default)]
    temperature: Option<String>,
    #[serde(default)]
    windspeed: Option<String>,
}

/// Query string for the forecast endpoint. Units are fixed to Fahrenheit/mph.
pub fn query_params(place: &GeocodedPlace) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", place.latitude.to_string()),
        ("longitude", place.longitude.to_string()),
        ("current_weather", "true".to_string()),
        ("temperature_unit", TEMPERATURE_UNIT.to_string()),
        ("wind_speed_unit", WIND_SPEED_UNIT.to_string()),
        ("timezone", "auto".to_string()),
    ]
}

/// Normalize a 2xx forecast body into a report for `place`.
///
/// Missing readings become `NaN` and missing units fall back to the
/// requested ones; only a missing `current_weather` section is an error.
pub fn parse_response(body: &str, place: &GeocodedPlace) -> Result<WeatherReport, WeatherError> {
    let response: ForecastResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::transport(Api::Weather, format!("invalid response body: {}", e)))?;

    let current = response.current_weather.ok_or(WeatherError::MissingData)?;
    let units = response.current_weather_units.unwrap_or_default();

    Ok(WeatherReport {
        location: place.canonical_name.clone(),
        latitude: place.latitude,
        longitude: place.longitude,
        temperature: current.temperature.unwrap_or(f64::NAN),
        temperature_unit: units
            .temperature
            .unwrap_or_else(|| TEMPERATURE_UNIT.to_string()),
        weather_description: weather_code::describe(
            current.weathercode.unwrap_or(weather_code::MISSING_CODE),
        ),
        wind_speed: current.windspeed.unwrap_or(f64::NAN),
        wind_speed_unit: units
            .windspeed
            .unwrap_or_else(|| WIND_SPEED_UNIT.to_string()),
    })
}
