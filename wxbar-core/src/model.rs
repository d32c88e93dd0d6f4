use serde::{Deserialize, Serialize};

/// Everything a provider needs for one fetch of current conditions.
#[derive(Debug, Clone)]
pub struct WeatherRequest {
    pub city_id: String,
    pub api_key: String,
    pub units: Units,
}

/// One reading of current conditions, fetched fresh each poll cycle and
/// discarded after formatting. Never cached or persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temp: f64,
    pub condition_code: u16,
    pub description: String,
    /// Unix epoch seconds, as delivered by the provider.
    pub sunrise: i64,
    /// Unix epoch seconds, as delivered by the provider.
    pub sunset: i64,
}

impl WeatherSnapshot {
    /// True when `now` (epoch seconds) lies between sunrise and sunset,
    /// both bounds included.
    pub fn is_daytime_at(&self, now: i64) -> bool {
        self.sunrise <= now && now <= self.sunset
    }
}

/// Unit system sent to the provider and shown on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Metric,
    Imperial,
}

impl Units {
    pub fn from_metric(metric: bool) -> Self {
        if metric { Units::Metric } else { Units::Imperial }
    }

    /// Value of the provider's `units` query parameter.
    pub fn as_query(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// Temperature suffix for the status line.
    pub fn symbol(&self) -> &'static str {
        match self {
            Units::Metric => "°C",
            Units::Imperial => "°F",
        }
    }
}

impl std::fmt::Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_phase_is_inclusive_at_both_bounds() {
        let snapshot = WeatherSnapshot {
            temp: 10.0,
            condition_code: 800,
            description: "clear sky".to_string(),
            sunrise: 1_000,
            sunset: 2_000,
        };

        assert!(snapshot.is_daytime_at(1_000));
        assert!(snapshot.is_daytime_at(1_500));
        assert!(snapshot.is_daytime_at(2_000));
        assert!(!snapshot.is_daytime_at(999));
        assert!(!snapshot.is_daytime_at(2_001));
    }

    #[test]
    fn units_follow_the_metric_flag() {
        assert_eq!(Units::from_metric(true), Units::Metric);
        assert_eq!(Units::from_metric(false), Units::Imperial);

        assert_eq!(Units::Metric.as_query(), "metric");
        assert_eq!(Units::Imperial.as_query(), "imperial");
        assert_eq!(Units::Metric.symbol(), "°C");
        assert_eq!(Units::Imperial.symbol(), "°F");
    }
}
