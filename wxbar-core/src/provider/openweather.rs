use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{
    error::PollError,
    model::{WeatherRequest, WeatherSnapshot},
};

use super::WeatherProvider;

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather current-weather endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }
}

impl Default for OpenWeatherProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(
        &self,
        request: &WeatherRequest,
    ) -> Result<WeatherSnapshot, PollError> {
        let res = self
            .http
            .get(API_URL)
            .query(&[
                ("id", request.city_id.as_str()),
                ("appid", request.api_key.as_str()),
                ("units", request.units.as_query()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            // Short on purpose: the status line shows at most 20 chars of it.
            return Err(PollError::Network(format!("HTTP {status}")));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)?;
        parsed.into_snapshot()
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    id: u16,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    sunrise: i64,
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: OwMain,
    weather: Vec<OwWeather>,
    sys: OwSys,
}

impl OwCurrentResponse {
    fn into_snapshot(self) -> Result<WeatherSnapshot, PollError> {
        let weather = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| PollError::Data("empty weather list".to_string()))?;

        Ok(WeatherSnapshot {
            temp: self.main.temp,
            condition_code: weather.id,
            description: weather.description,
            sunrise: self.sys.sunrise,
            sunset: self.sys.sunset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // A /data/2.5/weather body as the API returns it, extra fields and all.
    const CURRENT_BODY: &str = r#"{
        "coord": {"lon": -122.08, "lat": 37.39},
        "weather": [{"id": 801, "main": "Clouds", "description": "few clouds", "icon": "02d"}],
        "base": "stations",
        "main": {"temp": 17.4, "feels_like": 16.9, "pressure": 1015, "humidity": 64},
        "visibility": 10000,
        "wind": {"speed": 1.5, "deg": 350},
        "clouds": {"all": 20},
        "dt": 1661870592,
        "sys": {"type": 2, "id": 2035409, "country": "US", "sunrise": 1661834187, "sunset": 1661882248},
        "timezone": -25200,
        "id": 5375480,
        "name": "Mountain View",
        "cod": 200
    }"#;

    #[test]
    fn current_body_maps_to_snapshot() {
        let parsed: OwCurrentResponse = serde_json::from_str(CURRENT_BODY).unwrap();
        let snapshot = parsed.into_snapshot().unwrap();

        assert_eq!(snapshot.temp, 17.4);
        assert_eq!(snapshot.condition_code, 801);
        assert_eq!(snapshot.description, "few clouds");
        assert_eq!(snapshot.sunrise, 1661834187);
        assert_eq!(snapshot.sunset, 1661882248);
    }

    #[test]
    fn body_without_weather_is_a_data_error() {
        let body = r#"{"main": {"temp": 17.4}, "sys": {"sunrise": 1, "sunset": 2}}"#;

        let err: PollError = serde_json::from_str::<OwCurrentResponse>(body).unwrap_err().into();
        assert!(matches!(err, PollError::Data(_)));
    }

    #[test]
    fn empty_weather_list_is_a_data_error() {
        let body = r#"{"main": {"temp": 17.4}, "weather": [], "sys": {"sunrise": 1, "sunset": 2}}"#;
        let parsed: OwCurrentResponse = serde_json::from_str(body).unwrap();

        assert!(matches!(parsed.into_snapshot(), Err(PollError::Data(_))));
    }
}
