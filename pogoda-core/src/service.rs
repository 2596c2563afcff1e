use crate::{
    cities::CityDirectory,
    generator::ReadingGenerator,
    model::{Weather, WeatherError},
};

/// Facade combining the city lookup table with the reading generator.
#[derive(Debug, Clone, Default)]
pub struct WeatherService {
    cities: CityDirectory,
    generator: ReadingGenerator,
}

impl WeatherService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current weather for a city given as free-form input.
    ///
    /// On success the reading is labeled with the canonical city name.
    /// An unknown city yields [`WeatherError::CityNotFound`].
    pub fn get_weather(&self, city_input: &str) -> Result<Weather, WeatherError> {
        let city = self
            .cities
            .resolve(city_input)
            .ok_or(WeatherError::CityNotFound)?;

        Ok(self.generator.generate(city))
    }

    /// Forecast of `days` independently sampled readings, labeled
    /// "<город> (День N)" for N = 1..=days. An unknown city yields an
    /// empty vec rather than an error.
    pub fn get_forecast(&self, city_input: &str, days: u32) -> Vec<Weather> {
        let Some(city) = self.cities.resolve(city_input) else {
            return Vec::new();
        };

        (1..=days)
            .map(|day| self.generator.generate(format!("{city} (День {day})")))
            .collect()
    }

    /// Canonical names of every city the service knows about.
    pub fn available_cities(&self) -> Vec<&'static str> {
        self.cities.canonical_names()
    }
}
