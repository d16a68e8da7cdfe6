//! Geocode → forecast sequencing.
//!
//! The forecast stage only runs with a place produced by the geocoder; any
//! geocoding failure is returned as-is.

use std::future::Future;

use log::{info, warn};

use crate::client::OpenMeteoClient;
use crate::config::Config;
use crate::error::WeatherError;
use crate::model::{GeocodedPlace, LocationQuery, WeatherOutcome, WeatherReport};

/// The two upstream stages a weather lookup is composed of.
///
/// The orchestrator calls this trait instead of the HTTP client directly so
/// it can be driven by test doubles.
pub trait WeatherStages: Send + Sync {
    fn geocode(
        &self,
        query: &LocationQuery,
    ) -> impl Future<Output = Result<GeocodedPlace, WeatherError>> + Send;

    fn current_weather(
        &self,
        place: &GeocodedPlace,
    ) -> impl Future<Output = Result<WeatherReport, WeatherError>> + Send;
}

/// Run both stages for `location` and fold the result into one outcome.
pub async fn get_current_weather<S: WeatherStages>(stages: &S, location: &str) -> WeatherOutcome {
    let result = run(stages, location).await;
    if let Err(e) = &result {
        match e.api() {
            Some(api) => warn!("Weather lookup for '{}' failed at {}: {}", location, api, e),
            None => warn!("Weather lookup for '{}' rejected: {}", location, e),
        }
    }
    WeatherOutcome::from(result)
}

async fn run<S: WeatherStages>(stages: &S, location: &str) -> Result<WeatherReport, WeatherError> {
    let query = LocationQuery::new(location)?;
    let place = stages.geocode(&query).await?;
    stages.current_weather(&place).await
}

/// Look up current weather against the configured Open-Meteo endpoints.
///
/// The HTTP client lives only for this call.
pub async fn lookup(config: &Config, location: &str) -> WeatherOutcome {
    info!("Looking up current weather for '{}'", location);
    match OpenMeteoClient::new(config) {
        Ok(client) => get_current_weather(&client, location).await,
        Err(e) => WeatherOutcome::from(Err(e)),
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted stages that record how often each one ran.
    pub struct MockStages {
        pub geocode_result: Box<dyn Fn(&LocationQuery) -> Result<GeocodedPlace, WeatherError> + Send + Sync>,
        pub forecast_result: Box<dyn Fn(&GeocodedPlace) -> Result<WeatherReport, WeatherError> + Send + Sync>,
        pub geocode_calls: AtomicUsize,
        pub forecast_calls: AtomicUsize,
    }

    impl MockStages {
        pub fn new(
            geocode_result: impl Fn(&LocationQuery) -> Result<GeocodedPlace, WeatherError> + Send + Sync + 'static,
            forecast_result: impl Fn(&GeocodedPlace) -> Result<WeatherReport, WeatherError> + Send + Sync + 'static,
        ) -> Self {
            Self {
                geocode_result: Box::new(geocode_result),
                forecast_result: Box::new(forecast_result),
                geocode_calls: AtomicUsize::new(0),
                forecast_calls: AtomicUsize::new(0),
            }
        }

        pub fn geocode_calls(&self) -> usize {
            self.geocode_calls.load(Ordering::SeqCst)
        }

        pub fn forecast_calls(&self) -> usize {
            self.forecast_calls.load(Ordering::SeqCst)
        }
    }

    impl WeatherStages for MockStages {
        async fn geocode(&self, query: &LocationQuery) -> Result<GeocodedPlace, WeatherError> {
            self.geocode_calls.fetch_add(1, Ordering::SeqCst);
            (self.geocode_result)(query)
        }

        async fn current_weather(&self, place: &GeocodedPlace) -> Result<WeatherReport, WeatherError> {
            self.forecast_calls.fetch_add(1, Ordering::SeqCst);
            (self.forecast_result)(place)
        }
    }
}
