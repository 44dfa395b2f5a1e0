//! Core library for the `skyview` weather screen.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The typed provider payload and the render-ready view projection
//! - The OpenWeather fetch client behind a provider trait
//!
//! It is used by `skyview-app`, but can also be reused by other binaries or
//! services.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;

pub use config::Config;
pub use error::FetchError;
pub use model::{ForecastSlot, WeatherReport, WeatherView, HOURLY_STRIP};
pub use provider::{OpenWeatherProvider, WeatherProvider};
