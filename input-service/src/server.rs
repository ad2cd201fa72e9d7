//! Input service HTTP server
//!
//! Validates the postal code and relays the weather service's answer
//! (status and body) unchanged.

use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::cep::CepRequest;
use crate::client::WeatherServiceClient;
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub weather: WeatherServiceClient,
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
        .route("/input", post(post_input))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// POST /input
///
/// Body: `{"cep": "01310930"}`. The response is whatever the weather service
/// answered, served as JSON.
pub async fn post_input(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = CepRequest::parse(&body)?;

    let forwarded = state.weather.forward(&request).await?;

    Ok((
        forwarded.status,
        [(header::CONTENT_TYPE, "application/json")],
        forwarded.body,
    )
        .into_response())
}
