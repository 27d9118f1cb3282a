use cep_weather::app::weather::{router, WeatherState};
use cep_weather::utils::telemetry;
use cep_weather::WeatherConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // WEATHER_API_KEY is required; a missing key is fatal before the
    // listener is bound, the service never serves unconfigured.
    let config = WeatherConfig::from_env()?;
    telemetry::init("weather-service", config.otlp_endpoint.as_deref())?;

    let state = WeatherState::from_config(&config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("weather service listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    telemetry::shutdown();
    Ok(())
}
