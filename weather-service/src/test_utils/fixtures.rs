//! Test fixtures

use std::sync::Arc;

use crate::app::WeatherService;
use crate::domain::entities::ZipCode;
use crate::AppState;

use super::mocks::{MockLocationResolver, MockTemperatureProvider};

/// Avenida Paulista, São Paulo
pub fn test_zipcode() -> ZipCode {
    ZipCode::parse("01310930").unwrap()
}

/// App state wired to the given mocks
pub fn test_state(
    locations: Arc<MockLocationResolver>,
    temperatures: Arc<MockTemperatureProvider>,
) -> AppState {
    AppState {
        weather_service: Arc::new(WeatherService::new(locations, temperatures)),
    }
}
