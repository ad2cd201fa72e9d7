//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: postal codes, temperature readings and the weather report
//! - `ports`: Trait definitions for the location and temperature lookups

pub mod entities;
pub mod ports;
