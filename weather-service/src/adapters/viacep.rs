//! ViaCEP postal code lookup

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::domain::entities::ZipCode;
use crate::domain::ports::LocationResolver;
use crate::error::LocationError;

/// Location resolver backed by the ViaCEP API
pub struct ViaCepResolver {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    localidade: String,
    /// Set (as `true` or `"true"`) when ViaCEP has no record for the code
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_unknown(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(flag)) => flag == "true",
            _ => false,
        }
    }
}

impl ViaCepResolver {
    /// `accept_invalid_certs` disables TLS certificate verification and must
    /// only be enabled explicitly through configuration.
    pub fn new(base_url: String, accept_invalid_certs: bool) -> Result<Self, LocationError> {
        let http = Client::builder()
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn lookup_url(&self, zipcode: &ZipCode) -> String {
        format!("{}/ws/{}/json/", self.base_url, zipcode.as_str())
    }
}

#[async_trait]
impl LocationResolver for ViaCepResolver {
    #[tracing::instrument(name = "get-location", skip(self), fields(cep = %zipcode))]
    async fn resolve(&self, zipcode: &ZipCode) -> Result<String, LocationError> {
        let response = self.http.get(self.lookup_url(zipcode)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LocationError::Status(status.as_u16()));
        }

        let body: ViaCepResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Deserialization(e.to_string()))?;

        if body.is_unknown() || body.localidade.trim().is_empty() {
            return Err(LocationError::NotFound(zipcode.to_string()));
        }

        tracing::debug!(city = %body.localidade, "Resolved postal code");
        Ok(body.localidade)
    }
}
