//! Domain ports (traits)
//!
//! The weather use case depends on two independent lookups. Adapters provide
//! the HTTP implementations; tests use in-memory mocks.

use async_trait::async_trait;

use crate::domain::entities::ZipCode;
use crate::error::{LocationError, TemperatureError};

/// Resolves a postal code to a city name
#[async_trait]
pub trait LocationResolver: Send + Sync {
    async fn resolve(&self, zipcode: &ZipCode) -> Result<String, LocationError>;
}

/// Looks up the current temperature of a city, in Celsius
#[async_trait]
pub trait TemperatureProvider: Send + Sync {
    async fn current_celsius(&self, city: &str) -> Result<f64, TemperatureError>;
}
