//! Weather handler

use axum::{body::Bytes, extract::State, Json};

use crate::domain::entities::{CepRequest, WeatherReport, ZipCode};
use crate::error::AppError;
use crate::AppState;

/// POST /weather
///
/// Body: `{"cep": "01310930"}`. Responds with the city and its current
/// temperature in Celsius, Fahrenheit and Kelvin.
///
/// The body is decoded by hand so that a missing `Content-Type` is accepted
/// and a malformed body maps to 400 instead of axum's extractor rejections.
pub async fn get_weather(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WeatherReport>, AppError> {
    let request = CepRequest::from_slice(&body)?;
    let zipcode = ZipCode::parse(request.cep)?;

    let report = state.weather_service.report_for(&zipcode).await?;
    Ok(Json(report))
}
