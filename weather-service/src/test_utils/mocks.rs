//! Mock implementations of port traits

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::domain::entities::ZipCode;
use crate::domain::ports::{LocationResolver, TemperatureProvider};
use crate::error::{LocationError, TemperatureError};

// ============================================================================
// Location Resolver
// ============================================================================

enum LocationOutcome {
    City(String),
    Fail(fn() -> LocationError),
}

pub struct MockLocationResolver {
    outcome: LocationOutcome,
    calls: AtomicUsize,
}

impl MockLocationResolver {
    pub fn returning(city: &str) -> Self {
        Self {
            outcome: LocationOutcome::City(city.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: fn() -> LocationError) -> Self {
        Self {
            outcome: LocationOutcome::Fail(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationResolver for MockLocationResolver {
    async fn resolve(&self, _zipcode: &ZipCode) -> Result<String, LocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            LocationOutcome::City(city) => Ok(city.clone()),
            LocationOutcome::Fail(error) => Err(error()),
        }
    }
}

// ============================================================================
// Temperature Provider
// ============================================================================

enum TemperatureOutcome {
    Celsius(f64),
    Fail(fn() -> TemperatureError),
}

pub struct MockTemperatureProvider {
    outcome: TemperatureOutcome,
    cities: RwLock<Vec<String>>,
}

impl MockTemperatureProvider {
    pub fn returning(celsius: f64) -> Self {
        Self {
            outcome: TemperatureOutcome::Celsius(celsius),
            cities: RwLock::new(Vec::new()),
        }
    }

    pub fn failing(error: fn() -> TemperatureError) -> Self {
        Self {
            outcome: TemperatureOutcome::Fail(error),
            cities: RwLock::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.cities.read().unwrap().len()
    }

    /// Cities requested so far, in call order
    pub fn cities(&self) -> Vec<String> {
        self.cities.read().unwrap().clone()
    }
}

#[async_trait]
impl TemperatureProvider for MockTemperatureProvider {
    async fn current_celsius(&self, city: &str) -> Result<f64, TemperatureError> {
        self.cities.write().unwrap().push(city.to_string());
        match &self.outcome {
            TemperatureOutcome::Celsius(celsius) => Ok(*celsius),
            TemperatureOutcome::Fail(error) => Err(error()),
        }
    }
}
