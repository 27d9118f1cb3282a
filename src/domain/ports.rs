use crate::domain::model::{CityResolution, PostalCode};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Resolves a postal code to a locality name.
#[async_trait]
pub trait CityDirectory: Send + Sync {
    async fn resolve(&self, cep: &PostalCode) -> Result<CityResolution>;
}

/// Provides the current temperature for a city, in Celsius.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_celsius(&self, city: &str) -> Result<f64>;
}
