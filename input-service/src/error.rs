//! Error types for the input service

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

/// Failures talking to the weather service
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("{0}")]
    Request(#[source] reqwest::Error),

    #[error("failed to read response body")]
    ReadBody(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid request body")]
    InvalidBody,

    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error(transparent)]
    Forward(#[from] ForwardError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidBody => StatusCode::BAD_REQUEST,
            AppError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Forward(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Forward(ForwardError::Request(e)) => {
                tracing::error!("Weather service request failed: {:?}", e);
            }
            AppError::Forward(ForwardError::ReadBody(e)) => {
                tracing::error!("Failed to read weather service response: {:?}", e);
            }
            AppError::InvalidBody | AppError::InvalidZipcode => {}
        }

        (self.status(), self.to_string()).into_response()
    }
}
