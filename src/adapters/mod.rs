pub mod backend;
pub mod viacep;
pub mod weather_api;

pub use backend::{BackendClient, RelayedResponse};
pub use viacep::ViaCepClient;
pub use weather_api::WeatherApiClient;
