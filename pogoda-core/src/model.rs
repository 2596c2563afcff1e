use thiserror::Error;

/// One simulated weather reading.
///
/// Readings are created fresh on every request and are not stored anywhere
/// beyond the caller's use. Field ranges are enforced by the generator:
/// temperature in [-20, 35), humidity in [30, 90), wind speed in [0, 25).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weather {
    /// Display label, either a canonical city name or "<город> (День N)".
    pub city: String,
    /// Degrees Celsius.
    pub temperature: i32,
    /// One of the fixed condition labels, see [`crate::generator::CONDITIONS`].
    pub condition: String,
    /// Relative humidity, percent.
    pub humidity: u8,
    /// Meters per second.
    pub wind_speed: u8,
}

/// The only failure a lookup can produce. An unknown city is a valid
/// outcome surfaced to the user, never a panic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("Город не найден")]
    CityNotFound,
}
