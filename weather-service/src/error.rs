//! Error types for the weather service
//!
//! - `ConfigError`: startup configuration failures
//! - `LocationError`: postal code lookup failures (ViaCEP)
//! - `TemperatureError`: current temperature lookup failures (WeatherAPI)
//! - `AppError`: request-level errors, mapped to plain-text HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Location resolver errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Lookup returned status {0}")]
    Status(u16),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("No locality for postal code {0}")]
    NotFound(String),
}

/// Temperature provider errors
#[derive(Debug, Error)]
pub enum TemperatureError {
    #[error("WEATHER_API_KEY is not set")]
    MissingApiKey,

    /// Built with `without_url` so the key in the query string stays out of logs
    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    #[error("Failed to fetch temperature: {0}")]
    Status(u16),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Request-level errors returned by handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body")]
    InvalidBody,

    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound(#[source] LocationError),

    #[error("error fetching temperature")]
    Temperature(#[source] TemperatureError),
}

impl From<LocationError> for AppError {
    fn from(e: LocationError) -> Self {
        AppError::ZipcodeNotFound(e)
    }
}

impl From<TemperatureError> for AppError {
    fn from(e: TemperatureError) -> Self {
        AppError::Temperature(e)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody => StatusCode::BAD_REQUEST,
            AppError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ZipcodeNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Temperature(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ZipcodeNotFound(e) => {
                tracing::warn!("Location lookup failed: {}", e);
            }
            AppError::Temperature(e) => {
                tracing::error!("Error fetching temperature: {}", e);
            }
            AppError::InvalidBody | AppError::InvalidZipcode => {}
        }

        (self.status(), self.to_string()).into_response()
    }
}
