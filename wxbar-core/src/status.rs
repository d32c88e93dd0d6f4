use chrono::Utc;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::PollError,
    icons,
    model::{Units, WeatherRequest, WeatherSnapshot},
    provider::{WeatherProvider, openweather::OpenWeatherProvider},
};

/// Runs poll cycles and keeps every failure inside the status line.
///
/// A bar hands this widget a text slot and nothing else, so [`poll`]
/// never fails: each failure kind is reduced to its own one-line
/// diagnostic instead. There is no state between cycles and no retry;
/// the next scheduled poll is the only recovery mechanism.
///
/// [`poll`]: StatusPoller::poll
#[derive(Debug)]
pub struct StatusPoller {
    config: Config,
    provider: Box<dyn WeatherProvider>,
}

impl StatusPoller {
    /// Poller backed by the OpenWeather API.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            provider: Box::new(OpenWeatherProvider::new()),
        }
    }

    /// Poller backed by an arbitrary provider implementation.
    pub fn with_provider(config: Config, provider: Box<dyn WeatherProvider>) -> Self {
        Self { config, provider }
    }

    /// Run one poll cycle and return the line to display.
    pub async fn poll(&self) -> String {
        match self.try_poll().await {
            Ok(line) => line,
            Err(err) => {
                warn!("poll cycle degraded: {err}");
                err.status_line()
            }
        }
    }

    async fn try_poll(&self) -> Result<String, PollError> {
        // No credentials, no network: the fixed line is the whole answer.
        let (api_key, city_id) = self.config.credentials().ok_or(PollError::MissingConfig)?;

        let units = Units::from_metric(self.config.metric);
        let request = WeatherRequest {
            city_id,
            api_key,
            units,
        };

        let snapshot = self.provider.current_weather(&request).await?;
        debug!(
            code = snapshot.condition_code,
            temp = snapshot.temp,
            "fetched current conditions"
        );

        Ok(format_status(&snapshot, units, Utc::now().timestamp()))
    }
}

/// Render one snapshot as `"{glyph} {temp}{unit} {description}"`.
///
/// The temperature is rounded to the nearest integer and the description
/// title-cased; `now` (epoch seconds) decides between day and night
/// glyphs.
pub fn format_status(snapshot: &WeatherSnapshot, units: Units, now: i64) -> String {
    let glyph = icons::glyph(snapshot.condition_code, snapshot.is_daytime_at(now));
    let temp = snapshot.temp.round() as i64;
    let description = title_case(&snapshot.description);

    format!("{glyph} {temp}{units} {description}")
}

/// Uppercase the first letter of every alphabetic run and lowercase the
/// rest: `"sand/dust whirls"` becomes `"Sand/Dust Whirls"`.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
