//! Geocoder stage: free-text place name → coordinates.
//!
//! Only the first upstream match is used; there is no ranking or
//! disambiguation between candidates.

use serde::Deserialize;

use crate::error::{Api, WeatherError};
use crate::model::{GeocodedPlace, LocationQuery};

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Option<Vec<GeocodingMatch>>,
}

#[derive(Debug, Deserialize)]
struct GeocodingMatch {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    name: Option<String>,
}

/// Query string for the geocoding search endpoint.
pub fn query_params(query: &LocationQuery) -> Vec<(&'static str, String)> {
    vec![
        ("name", query.as_str().to_string()),
        ("count", "1".to_string()),
        ("language", "en".to_string()),
        ("format", "json".to_string()),
    ]
}

/// Normalize a 2xx geocoding body into the first matching place.
///
/// An absent or empty `results` list is `NotFound`; an unreadable body is a
/// transport failure.
pub fn parse_response(body: &str, query: &LocationQuery) -> Result<GeocodedPlace, WeatherError> {
    let response: GeocodingResponse = serde_json::from_str(body)
        .map_err(|e| WeatherError::transport(Api::Geocoding, format!("invalid response body: {}", e)))?;

    let first = response
        .results
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| WeatherError::NotFound {
            location: query.to_string(),
        })?;

    Ok(GeocodedPlace {
        canonical_name: first.name.unwrap_or_else(|| query.to_string()),
        latitude: first.latitude,
        longitude: first.longitude,
    })
}
