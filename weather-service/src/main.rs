//! Weather Service
//!
//! Resolves a Brazilian postal code (CEP) to a city via ViaCEP, fetches the
//! city's current temperature from WeatherAPI and returns it in Celsius,
//! Fahrenheit and Kelvin.
//! Uses hexagonal (ports & adapters) architecture so both lookups can be mocked.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ViaCepResolver, WeatherApiProvider};
use app::WeatherService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/weather", post(handlers::get_weather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,weather_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting weather service...");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    if config.weather_api_key.is_none() {
        tracing::warn!("WEATHER_API_KEY is not set; temperature lookups will fail");
    }
    if config.viacep_accept_invalid_certs {
        tracing::warn!("TLS certificate verification is disabled for ViaCEP");
    }

    // Create adapters
    let locations = Arc::new(
        ViaCepResolver::new(
            config.viacep_url.clone(),
            config.viacep_accept_invalid_certs,
        )
        .context("Failed to build ViaCEP client")?,
    );
    let temperatures = Arc::new(WeatherApiProvider::new(
        config.weatherapi_url.clone(),
        config.weather_api_key.clone(),
    ));

    let state = AppState {
        weather_service: Arc::new(WeatherService::new(locations, temperatures)),
    };

    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
