use crate::{error::FetchError, model::WeatherReport};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

pub use openweather::OpenWeatherProvider;

/// A weather data source reachable over the network.
///
/// There is exactly one production implementation; the trait is the seam for
/// test doubles.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for `city` with a single best-effort request.
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, FetchError>;
}
