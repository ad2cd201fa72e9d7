use std::env;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8081;
pub const DEFAULT_WEATHER_SERVICE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL of the weather service; `/weather` is appended
    pub weather_service_url: String,
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

        Ok(Self {
            port,
            weather_service_url: lookup("WEATHER_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_WEATHER_SERVICE_URL.to_string()),
        })
    }
}
