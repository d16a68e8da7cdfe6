//! HTTP client for the two Open-Meteo upstreams.
//!
//! One `OpenMeteoClient` is built per tool call and dropped when the call
//! returns, so no connection state is shared between callers.

use std::time::Duration;

use log::{debug, info, warn};

use crate::config::Config;
use crate::error::{Api, WeatherError};
use crate::model::{GeocodedPlace, LocationQuery, WeatherReport};
use crate::orchestrator::WeatherStages;
use crate::{forecast, geocode};

const USER_AGENT: &str = concat!("openmeteo-mcp-server/", env!("CARGO_PKG_VERSION"));

/// Scoped client for one geocode → forecast sequence.
#[derive(Debug)]
pub struct OpenMeteoClient {
    http: reqwest::Client,
    geocoding_url: String,
    forecast_url: String,
    timeout: Duration,
}

impl OpenMeteoClient {
    /// Build a client for a single call. A failure here is reported against
    /// the geocoder, the first upstream the call would have reached.
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WeatherError::transport(Api::Geocoding, e))?;

        Ok(Self {
            http,
            geocoding_url: config.geocoding_url.clone(),
            forecast_url: config.forecast_url.clone(),
            timeout: config.timeout(),
        })
    }

    /// Issue one GET and return the body of a 2xx response.
    ///
    /// Non-2xx responses keep their status and raw body. Timeouts and any
    /// other send/read failure are `Transport` errors for `api`.
    async fn get_text(
        &self,
        api: Api,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<String, WeatherError> {
        debug!("{} request: {} {:?}", api, url, params);

        let response = self
            .http
            .get(url)
            .query(params)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("{} request failed: {}", api, e);
                WeatherError::transport(api, e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned status {}", api, status);
            return Err(WeatherError::UpstreamStatus {
                api,
                status: status.as_u16(),
                body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| WeatherError::transport(api, e))
    }
}

impl WeatherStages for OpenMeteoClient {
    async fn geocode(&self, query: &LocationQuery) -> Result<GeocodedPlace, WeatherError> {
        let body = self
            .get_text(Api::Geocoding, &self.geocoding_url, &geocode::query_params(query))
            .await?;
        let place = geocode::parse_response(&body, query)?;
        info!(
            "Geocoded '{}' to {} ({:.4}, {:.4})",
            query, place.canonical_name, place.latitude, place.longitude
        );
        Ok(place)
    }

    async fn current_weather(&self, place: &GeocodedPlace) -> Result<WeatherReport, WeatherError> {
        let body = self
            .get_text(Api::Weather, &self.forecast_url, &forecast::query_params(place))
            .await?;
        forecast::parse_response(&body, place)
    }
}
