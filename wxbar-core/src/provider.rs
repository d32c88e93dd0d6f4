use crate::{
    error::PollError,
    model::{WeatherRequest, WeatherSnapshot},
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of current weather conditions.
///
/// The one shipped implementation is [`openweather::OpenWeatherProvider`];
/// the trait is the seam test doubles and alternative backends plug into.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for the requested city.
    ///
    /// Implementations report failures through [`PollError`]; anything
    /// that fits neither `Network` nor `Data` belongs in
    /// `PollError::Unknown`.
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, PollError>;
}
