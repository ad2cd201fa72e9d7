use std::env;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_VIACEP_URL: &str = "https://viacep.com.br";
pub const DEFAULT_WEATHERAPI_URL: &str = "http://api.weatherapi.com";

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// WeatherAPI key. Requests fail with a server error while unset.
    pub weather_api_key: Option<String>,
    pub viacep_url: String,
    pub weatherapi_url: String,
    /// Skip TLS certificate verification for ViaCEP. Off unless explicitly enabled.
    pub viacep_accept_invalid_certs: bool,
}

// Hand-written so the API key never ends up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("viacep_url", &self.viacep_url)
            .field("weatherapi_url", &self.weatherapi_url)
            .field(
                "viacep_accept_invalid_certs",
                &self.viacep_accept_invalid_certs,
            )
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotEnv(e)),
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let viacep_accept_invalid_certs = match lookup("VIACEP_ACCEPT_INVALID_CERTS") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid {
                var: "VIACEP_ACCEPT_INVALID_CERTS",
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            port,
            weather_api_key: lookup("WEATHER_API_KEY").filter(|k| !k.trim().is_empty()),
            viacep_url: lookup("VIACEP_URL").unwrap_or_else(|| DEFAULT_VIACEP_URL.to_string()),
            weatherapi_url: lookup("WEATHERAPI_URL")
                .unwrap_or_else(|| DEFAULT_WEATHERAPI_URL.to_string()),
            viacep_accept_invalid_certs,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
