pub mod model;
pub mod ports;

pub use model::{CityResolution, PostalCode, TemperatureReading, WeatherReport};
pub use ports::{CityDirectory, WeatherProvider};
