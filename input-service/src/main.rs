//! Input Service
//!
//! Accepts a postal code (CEP), checks its length and forwards it to the
//! weather service, relaying the answer back to the caller.

mod cep;
mod client;
mod config;
mod error;
mod server;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use client::WeatherServiceClient;
use config::Config;
use server::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,input_service=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting input service");

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::debug!(?config, "Configuration loaded");

    let weather = WeatherServiceClient::new(&config.weather_service_url)
        .context("Failed to build weather service client")?;

    let app = server::build_router(AppState { weather });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
