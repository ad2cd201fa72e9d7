//! Adapters layer
//!
//! HTTP implementations of the domain ports.

pub mod viacep;
pub mod weatherapi;

pub use viacep::ViaCepResolver;
pub use weatherapi::WeatherApiProvider;
