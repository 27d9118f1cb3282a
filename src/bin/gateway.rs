use cep_weather::app::gateway::{router, GatewayState};
use cep_weather::utils::telemetry;
use cep_weather::GatewayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = GatewayConfig::from_env()?;
    telemetry::init("gateway", config.otlp_endpoint.as_deref())?;

    let state = GatewayState::from_config(&config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("gateway listening on {}", config.listen_addr);
    tracing::info!("delegating to weather service at {}", config.backend_url);

    axum::serve(listener, app).await?;

    telemetry::shutdown();
    Ok(())
}
