use crate::utils::error::{Result, ServiceError};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static CEP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{8}$").expect("hardcoded pattern"));

/// Brazilian postal code, exactly 8 ASCII digits. Construction is the only
/// validation point; everything downstream takes the typed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCode(String);

impl PostalCode {
    pub fn parse(raw: &str) -> Result<Self> {
        if CEP_PATTERN.is_match(raw) {
            Ok(PostalCode(raw.to_string()))
        } else {
            Err(ServiceError::InvalidZipcode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostalCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a postal-code lookup. "No such zipcode" is a domain outcome,
/// not a transport failure, so it gets its own variant instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityResolution {
    Found(String),
    NotFound,
}

/// A temperature sampled in Celsius. Fahrenheit and Kelvin are derived on
/// read, nothing is stored beyond the Celsius value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReading {
    celsius: f64,
}

impl TemperatureReading {
    pub fn from_celsius(celsius: f64) -> Self {
        Self { celsius }
    }

    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    pub fn fahrenheit(&self) -> f64 {
        self.celsius * 1.8 + 32.0
    }

    pub fn kelvin(&self) -> f64 {
        self.celsius + 273.0
    }
}

/// Final composed payload of the weather service.
#[derive(Debug, Clone, Serialize)]
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
            temp_c: reading.celsius(),
            temp_f: reading.fahrenheit(),
            temp_k: reading.kelvin(),
        }
    }
}
