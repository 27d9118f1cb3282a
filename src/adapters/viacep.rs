use crate::domain::model::{CityResolution, PostalCode};
use crate::domain::ports::CityDirectory;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::instrument;

/// ViaCEP postal-code lookup client.
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ViaCepPayload {
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    erro: bool,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl CityDirectory for ViaCepClient {
    #[instrument(name = "viacep.resolve", skip(self), fields(cep = %cep))]
    async fn resolve(&self, cep: &PostalCode) -> Result<CityResolution> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep.as_str());
        tracing::debug!("looking up postal code at {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ServiceError::Upstream(format!(
                "ViaCEP status: {}",
                status.as_u16()
            )));
        }

        let payload: ViaCepPayload = response.json().await?;
        if payload.erro {
            return Ok(CityResolution::NotFound);
        }

        tracing::debug!("resolved {} to {}", cep, payload.localidade);
        Ok(CityResolution::Found(payload.localidade))
    }
}
