use anyhow::Result;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use cep_weather::adapters::BackendClient;
use cep_weather::app::gateway::{router, GatewayState};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

const TIMEOUT: Duration = Duration::from_secs(5);

fn state_against(base_url: String) -> Result<GatewayState> {
    Ok(GatewayState {
        backend: Arc::new(BackendClient::new(base_url, TIMEOUT)?),
    })
}

async fn post_cep(state: GatewayState, body: &str) -> Result<(StatusCode, bytes::Bytes)> {
    let request = Request::builder()
        .method("POST")
        .uri("/cep")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))?;
    let response = router(state).oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    Ok((status, bytes))
}

#[tokio::test]
async fn test_success_response_is_relayed_verbatim() -> Result<()> {
    let server = MockServer::start();

    let backend_body =
        r#"{"city":"São Paulo","temp_C":25.0,"temp_F":77.0,"temp_K":298.0}"#;
    let backend_mock = server.mock(|when, then| {
        when.method(GET).path("/weather").query_param("cep", "01001000");
        then.status(200)
            .header("content-type", "application/json")
            .body(backend_body);
    });

    let (status, body) = post_cep(state_against(server.base_url())?, r#"{"cep":"01001000"}"#).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(&body[..], backend_body.as_bytes());
    backend_mock.assert();
    Ok(())
}

#[tokio::test]
async fn test_backend_not_found_is_relayed_untouched() -> Result<()> {
    let server = MockServer::start();

    let backend_body = r#"{"message":"can not find zipcode"}"#;
    server.mock(|when, then| {
        when.method(GET).path("/weather").query_param("cep", "00000000");
        then.status(404)
            .header("content-type", "application/json")
            .body(backend_body);
    });

    let (status, body) = post_cep(state_against(server.base_url())?, r#"{"cep":"00000000"}"#).await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(&body[..], backend_body.as_bytes());
    Ok(())
}

#[tokio::test]
async fn test_invalid_json_body_rejected() -> Result<()> {
    let server = MockServer::start();

    let backend_mock = server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(200);
    });

    let (status, body) = post_cep(state_against(server.base_url())?, "{not json").await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_slice(&body)?;
    assert_eq!(json["message"], "invalid json");
    backend_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_malformed_cep_rejected_without_delegation() -> Result<()> {
    let server = MockServer::start();

    let backend_mock = server.mock(|when, then| {
        when.method(GET).path("/weather");
        then.status(200);
    });

    for body in [r#"{"cep":"123"}"#, r#"{"cep":"0100100a"}"#, r#"{}"#] {
        let (status, bytes) = post_cep(state_against(server.base_url())?, body).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "body: {}", body);
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert_eq!(json["message"], "invalid zipcode");
    }

    backend_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_non_post_methods_get_405() -> Result<()> {
    let server = MockServer::start();

    for method in ["GET", "PUT", "DELETE"] {
        let request = Request::builder()
            .method(method)
            .uri("/cep")
            .body(Body::empty())?;
        let response = router(state_against(server.base_url())?).oneshot(request).await?;
        assert_eq!(
            response.status(),
            StatusCode::METHOD_NOT_ALLOWED,
            "method: {}",
            method
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;
        assert_eq!(json["message"], "use POST");
    }

    Ok(())
}

#[tokio::test]
async fn test_backend_transport_failure_maps_to_500() -> Result<()> {
    // Nothing listens here, the delegation fails at the transport level.
    let state = state_against("http://127.0.0.1:9".to_string())?;

    let (status, body) = post_cep(state, r#"{"cep":"01001000"}"#).await?;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let json: serde_json::Value = serde_json::from_slice(&body)?;
    assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    Ok(())
}
