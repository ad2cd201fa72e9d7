//! WeatherAPI.com current conditions client

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::ports::TemperatureProvider;
use crate::error::TemperatureError;

/// Temperature provider backed by WeatherAPI.com
pub struct WeatherApiProvider {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct CurrentResponse {
    current: Current,
}

#[derive(Deserialize)]
struct Current {
    temp_c: f64,
}

impl WeatherApiProvider {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

#[async_trait]
impl TemperatureProvider for WeatherApiProvider {
    #[tracing::instrument(name = "get-temperature", skip(self))]
    async fn current_celsius(&self, city: &str) -> Result<f64, TemperatureError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(TemperatureError::MissingApiKey)?;

        let response = self
            .http
            .get(format!("{}/v1/current.json", self.base_url))
            .query(&[("key", api_key), ("q", city)])
            .send()
            .await
            .map_err(|e| TemperatureError::Request(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TemperatureError::Status(status.as_u16()));
        }

        let body: CurrentResponse = response
            .json()
            .await
            .map_err(|e| TemperatureError::Deserialization(e.without_url().to_string()))?;

        Ok(body.current.temp_c)
    }
}
