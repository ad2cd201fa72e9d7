//! Postal code request decoding and validation

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

/// Body accepted by `POST /input` and sent on to `POST /weather`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CepRequest {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub cep: String,
}

impl CepRequest {
    /// Decode and length-check a request body
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        let request: CepRequest =
            serde_json::from_slice(body).map_err(|_| AppError::InvalidBody)?;

        if request.cep.chars().count() != ZIPCODE_LEN {
            return Err(AppError::InvalidZipcode);
        }
        Ok(request)
    }
}
