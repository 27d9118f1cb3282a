pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod utils;

pub use config::{GatewayConfig, WeatherConfig};
pub use domain::{CityResolution, PostalCode, TemperatureReading, WeatherReport};
pub use utils::error::{Result, ServiceError};
