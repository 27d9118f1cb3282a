use crate::adapters::{ViaCepClient, WeatherApiClient};
use crate::config::WeatherConfig;
use crate::domain::model::{CityResolution, PostalCode, TemperatureReading, WeatherReport};
use crate::domain::ports::{CityDirectory, WeatherProvider};
use crate::utils::error::{Result, ServiceError};
use crate::utils::telemetry;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tracing::instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

#[derive(Clone)]
pub struct WeatherState {
    pub directory: Arc<dyn CityDirectory>,
    pub weather: Arc<dyn WeatherProvider>,
}

impl WeatherState {
    pub fn from_config(config: &WeatherConfig) -> Result<Self> {
        let directory =
            ViaCepClient::new(config.viacep_base_url.clone(), config.request_timeout)?;
        let weather = WeatherApiClient::new(
            config.weather_api_base_url.clone(),
            config.weather_api_key.clone(),
            config.request_timeout,
        )?;
        Ok(Self {
            directory: Arc::new(directory),
            weather: Arc::new(weather),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WeatherQuery {
    #[serde(default)]
    cep: String,
}

pub fn router(state: WeatherState) -> Router {
    Router::new()
        .route("/weather", get(handle_weather))
        .with_state(state)
}

/// Validating -> ResolvingCity -> ResolvingTemperature -> Composing.
/// The weather lookup consumes the resolved city, so the two external
/// calls are strictly sequential.
#[instrument(name = "weather.handle_query", skip_all)]
async fn handle_weather(
    State(state): State<WeatherState>,
    headers: HeaderMap,
    Query(query): Query<WeatherQuery>,
) -> std::result::Result<Json<WeatherReport>, ServiceError> {
    tracing::Span::current().set_parent(telemetry::extract_context(&headers));

    let cep = PostalCode::parse(&query.cep)?;

    let city = match state.directory.resolve(&cep).await? {
        CityResolution::Found(city) => city,
        CityResolution::NotFound => {
            tracing::info!("postal code {} has no locality", cep);
            return Err(ServiceError::ZipcodeNotFound);
        }
    };

    let celsius = state.weather.current_celsius(&city).await?;
    let reading = TemperatureReading::from_celsius(celsius);

    Ok(Json(WeatherReport::new(city, reading)))
}
