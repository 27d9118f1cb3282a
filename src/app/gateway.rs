use crate::adapters::backend::{BackendClient, RelayedResponse};
use crate::app::ErrorBody;
use crate::config::GatewayConfig;
use crate::domain::model::PostalCode;
use crate::utils::error::{Result, ServiceError};
use crate::utils::telemetry;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::post;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Clone)]
pub struct GatewayState {
    pub backend: Arc<BackendClient>,
}

impl GatewayState {
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let backend = BackendClient::new(config.backend_url.clone(), config.request_timeout)?;
        Ok(Self {
            backend: Arc::new(backend),
        })
    }
}

/// A missing `cep` field decodes as an empty string and fails format
/// validation, it is not an "invalid json" case.
#[derive(Debug, Deserialize)]
struct CepSubmission {
    #[serde(default)]
    cep: String,
}

pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/cep", post(handle_cep).fallback(method_not_allowed))
        .with_state(state)
}

#[instrument(name = "gateway.handle_cep", skip_all)]
async fn handle_cep(
    State(state): State<GatewayState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    tracing::Span::current().set_parent(telemetry::extract_context(&headers));

    let submission: CepSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(_) => return ServiceError::InvalidJson.into_response(),
    };

    let cep = match PostalCode::parse(&submission.cep) {
        Ok(cep) => cep,
        Err(e) => return e.into_response(),
    };

    match state.backend.forward_weather(&cep).await {
        Ok(relayed) => relayed.into_response(),
        Err(e) => {
            tracing::warn!("backend delegation failed: {}", e);
            e.into_response()
        }
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorBody::new("use POST")),
    )
        .into_response()
}

impl IntoResponse for RelayedResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}
