//! Application layer
//!
//! Orchestrates the location and temperature lookups for a request.

pub mod weather_service;

pub use weather_service::WeatherService;
