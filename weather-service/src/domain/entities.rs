//! Weather domain entities

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AppError;

/// Number of characters in a CEP (Brazilian postal code)
pub const ZIPCODE_LEN: usize = 8;

/// Helper to deserialize null as default (empty string)
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

/// Request body accepted by `POST /weather`
///
/// A missing or null `cep` field decodes to an empty string so it fails the length
/// check rather than the JSON decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CepRequest {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub cep: String,
}

impl CepRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|_| AppError::InvalidBody)
    }
}

/// A postal code that passed the length check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(raw: impl Into<String>) -> Result<Self, AppError> {
        let raw = raw.into();
        if raw.chars().count() != ZIPCODE_LEN {
            return Err(AppError::InvalidZipcode);
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ZipCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current temperature in all three scales
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl TemperatureReading {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius * 1.8 + 32.0,
            kelvin: celsius + 273.15,
        }
    }
}

/// Response body of `POST /weather`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl WeatherReport {
    pub fn new(city: String, reading: TemperatureReading) -> Self {
        Self {
            city,
            temp_c: reading.celsius,
            temp_f: reading.fahrenheit,
            temp_k: reading.kelvin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn freezing_point_conversion() {
        let reading = TemperatureReading::from_celsius(0.0);
        assert_eq!(reading.fahrenheit, 32.0);
        assert_eq!(reading.kelvin, 273.15);
    }

    #[test]
    fn boiling_point_conversion() {
        let reading = TemperatureReading::from_celsius(100.0);
        assert_eq!(reading.fahrenheit, 212.0);
        assert_eq!(reading.kelvin, 373.15);
    }

    #[test]
    fn negative_celsius_conversion() {
        let reading = TemperatureReading::from_celsius(-40.0);
        assert_eq!(reading.fahrenheit, -40.0);
        assert!((reading.kelvin - 233.15).abs() < 1e-9);
    }

    #[test]
    fn zipcode_requires_exactly_eight_chars() {
        assert!(ZipCode::parse("01310930").is_ok());
        assert!(matches!(
            ZipCode::parse("0131093"),
            Err(AppError::InvalidZipcode)
        ));
        assert!(matches!(
            ZipCode::parse("013109300"),
            Err(AppError::InvalidZipcode)
        ));
        assert!(matches!(ZipCode::parse(""), Err(AppError::InvalidZipcode)));
    }

    #[test]
    fn zipcode_does_not_check_digits() {
        assert!(ZipCode::parse("abcdefgh").is_ok());
    }

    #[test]
    fn cep_request_missing_field_is_empty() {
        let req = CepRequest::from_slice(b"{}").unwrap();
        assert_eq!(req.cep, "");
    }

    #[test]
    fn cep_request_null_field_is_empty() {
        let req = CepRequest::from_slice(br#"{"cep":null}"#).unwrap();
        assert_eq!(req.cep, "");
    }

    #[test]
    fn zipcode_counts_characters_not_bytes() {
        assert!(ZipCode::parse("0131093é").is_ok());
        assert!(matches!(
            ZipCode::parse("013109é"),
            Err(AppError::InvalidZipcode)
        ));
    }

    #[test]
    fn cep_request_rejects_malformed_json() {
        assert!(matches!(
            CepRequest::from_slice(b"{\"cep\":"),
            Err(AppError::InvalidBody)
        ));
        assert!(matches!(
            CepRequest::from_slice(b"{\"cep\": 1310930}"),
            Err(AppError::InvalidBody)
        ));
    }

    #[test]
    fn report_serializes_with_scale_suffixes() {
        let report = WeatherReport::new(
            "São Paulo".to_string(),
            TemperatureReading::from_celsius(25.0),
        );
        let json = serde_json::to_string(&report).unwrap();

        assert_eq!(
            json,
            r#"{"city":"São Paulo","temp_C":25.0,"temp_F":77.0,"temp_K":298.15}"#
        );
    }
}
