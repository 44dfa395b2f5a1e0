use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::{error::FetchError, model::WeatherReport};

use super::WeatherProvider;

const BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const UNITS: &str = "metric";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_owned())
    }

    /// Point the provider at a different endpoint, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport, FetchError> {
        debug!("requesting current conditions for {city}");

        let res = self
            .http
            .get(&self.base_url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        let report: WeatherReport = serde_json::from_str(&body)?;

        debug!("received current conditions for {:?}", report.name);
        Ok(report)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
