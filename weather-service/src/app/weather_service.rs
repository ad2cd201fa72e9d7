//! Weather lookup service
//!
//! Resolves a postal code to a city, then fetches and converts the city's
//! current temperature. The two lookups run sequentially and any failure
//! ends the request; there is no partial result.

use std::sync::Arc;

use crate::domain::entities::{TemperatureReading, WeatherReport, ZipCode};
use crate::domain::ports::{LocationResolver, TemperatureProvider};
use crate::error::AppError;

pub struct WeatherService {
    locations: Arc<dyn LocationResolver>,
    temperatures: Arc<dyn TemperatureProvider>,
}

impl WeatherService {
    pub fn new(
        locations: Arc<dyn LocationResolver>,
        temperatures: Arc<dyn TemperatureProvider>,
    ) -> Self {
        Self {
            locations,
            temperatures,
        }
    }

    #[tracing::instrument(name = "get-location-and-temperature", skip(self), fields(cep = %zipcode))]
    pub async fn report_for(&self, zipcode: &ZipCode) -> Result<WeatherReport, AppError> {
        let city = self.locations.resolve(zipcode).await?;
        let celsius = self.temperatures.current_celsius(&city).await?;

        Ok(WeatherReport::new(
            city,
            TemperatureReading::from_celsius(celsius),
        ))
    }
}
