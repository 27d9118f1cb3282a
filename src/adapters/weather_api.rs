use crate::domain::ports::WeatherProvider;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

/// WeatherAPI current-conditions client.
pub struct WeatherApiClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct WeatherApiPayload {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

impl WeatherApiClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    #[instrument(name = "weather_api.current", skip(self), fields(city = %city))]
    async fn current_celsius(&self, city: &str) -> Result<f64> {
        let url = format!("{}/v1/current.json", self.base_url);
        // reqwest URL-encodes the query pair, including non-ASCII city names.
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", city)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Upstream(format!(
                "WeatherAPI status: {}",
                status.as_u16()
            )));
        }

        let payload: WeatherApiPayload = response.json().await?;
        tracing::debug!("current temperature in {}: {}C", city, payload.current.temp_c);
        Ok(payload.current.temp_c)
    }
}
