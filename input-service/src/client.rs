//! HTTP client for the weather service

use axum::body::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::cep::CepRequest;
use crate::error::ForwardError;

/// Upstream status and raw body, relayed verbatim to the caller
#[derive(Debug)]
pub struct Forwarded {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP client for communicating with the weather service
#[derive(Clone)]
pub struct WeatherServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherServiceClient {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the postal code to `/weather` and collect the response as-is.
    ///
    /// Non-success statuses are not errors here; they are relayed.
    #[tracing::instrument(name = "forward-to-weather-service", skip(self, request), fields(cep = %request.cep))]
    pub async fn forward(&self, request: &CepRequest) -> Result<Forwarded, ForwardError> {
        let url = format!("{}/weather", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(ForwardError::Request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(ForwardError::ReadBody)?;

        tracing::debug!(%status, bytes = body.len(), "Weather service responded");
        Ok(Forwarded { status, body })
    }
}
