use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use std::env;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 5;

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn timeout_from_env() -> Result<Duration> {
    match env::var("REQUEST_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ServiceError::config(format!("REQUEST_TIMEOUT_SECS: not a number: {}", raw))),
        Err(_) => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

/// Front-service configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub listen_addr: String,
    /// Base URL of the weather service the gateway delegates to.
    pub backend_url: String,
    pub request_timeout: Duration,
    /// OTLP collector endpoint; span export is disabled when unset.
    pub otlp_endpoint: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        let config = Self {
            listen_addr: env_or("GATEWAY_LISTEN_ADDR", "0.0.0.0:8081"),
            backend_url: env_or("SERVICE_B_URL", "http://service-b:8082"),
            request_timeout: timeout_from_env()?,
            otlp_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for GatewayConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("GATEWAY_LISTEN_ADDR", &self.listen_addr)?;
        validate_url("SERVICE_B_URL", &self.backend_url)?;
        Ok(())
    }
}

/// Back-service configuration. The weather API key has no default and no
/// fallback: a missing key refuses startup instead of failing per request.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub listen_addr: String,
    pub weather_api_key: String,
    pub viacep_base_url: String,
    pub weather_api_base_url: String,
    pub request_timeout: Duration,
    pub otlp_endpoint: Option<String>,
}

impl WeatherConfig {
    pub fn from_env() -> Result<Self> {
        let weather_api_key = env::var("WEATHER_API_KEY")
            .map_err(|_| ServiceError::config("WEATHER_API_KEY is not set"))?;

        let config = Self {
            listen_addr: env_or("WEATHER_LISTEN_ADDR", "0.0.0.0:8082"),
            weather_api_key,
            viacep_base_url: env_or("VIACEP_BASE_URL", "https://viacep.com.br"),
            weather_api_base_url: env_or("WEATHER_API_BASE_URL", "https://api.weatherapi.com"),
            request_timeout: timeout_from_env()?,
            otlp_endpoint: env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for WeatherConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("WEATHER_LISTEN_ADDR", &self.listen_addr)?;
        validate_non_empty_string("WEATHER_API_KEY", &self.weather_api_key)?;
        validate_url("VIACEP_BASE_URL", &self.viacep_base_url)?;
        validate_url("WEATHER_API_BASE_URL", &self.weather_api_base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway_config() -> GatewayConfig {
        GatewayConfig {
            listen_addr: "127.0.0.1:8081".to_string(),
            backend_url: "http://service-b:8082".to_string(),
            request_timeout: Duration::from_secs(5),
            otlp_endpoint: None,
        }
    }

    fn weather_config() -> WeatherConfig {
        WeatherConfig {
            listen_addr: "127.0.0.1:8082".to_string(),
            weather_api_key: "test-key".to_string(),
            viacep_base_url: "https://viacep.com.br".to_string(),
            weather_api_base_url: "https://api.weatherapi.com".to_string(),
            request_timeout: Duration::from_secs(5),
            otlp_endpoint: None,
        }
    }

    #[test]
    fn test_gateway_config_validation() {
        assert!(gateway_config().validate().is_ok());

        let mut bad_url = gateway_config();
        bad_url.backend_url = "not-a-url".to_string();
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_weather_config_requires_api_key() {
        assert!(weather_config().validate().is_ok());

        let mut missing_key = weather_config();
        missing_key.weather_api_key = String::new();
        assert!(missing_key.validate().is_err());
    }
}
