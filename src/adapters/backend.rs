use crate::domain::model::PostalCode;
use crate::utils::error::Result;
use crate::utils::telemetry;
use axum::http::{HeaderMap, StatusCode};
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

/// Status and body of a back-service reply, relayed to the gateway's caller
/// untouched. The gateway validates input; the back service decides the
/// outcome — this type is the pass-through contract between the two.
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// HTTP client for the weather (back) service.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Delegates a weather query for `cep`, carrying the current trace
    /// context so the back service's spans join the caller's trace.
    #[instrument(name = "gateway.call_backend", skip(self), fields(cep = %cep))]
    pub async fn forward_weather(&self, cep: &PostalCode) -> Result<RelayedResponse> {
        let url = format!("{}/weather", self.base_url);

        let mut headers = HeaderMap::new();
        telemetry::inject_context(&mut headers);

        let response = self
            .client
            .get(&url)
            .query(&[("cep", cep.as_str())])
            .headers(headers)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!("backend replied {} ({} bytes)", status, body.len());

        Ok(RelayedResponse { status, body })
    }
}
