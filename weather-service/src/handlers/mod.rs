//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod weather;

pub use weather::get_weather;
