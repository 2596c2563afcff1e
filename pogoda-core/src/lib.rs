//! Core library for the `pogoda` CLI.
//!
//! This crate defines:
//! - The fixed city lookup table
//! - The random reading generator
//! - The service facade combining the two
//! - Shared domain models and the in-memory request history
//!
//! It is used by `pogoda-cli`, but can also be reused by other binaries.

pub mod cities;
pub mod generator;
pub mod history;
pub mod model;
pub mod service;

pub use cities::CityDirectory;
pub use generator::ReadingGenerator;
pub use history::RequestHistory;
pub use model::{Weather, WeatherError};
pub use service::WeatherService;
