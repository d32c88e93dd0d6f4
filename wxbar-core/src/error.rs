use thiserror::Error;

/// Everything that can go wrong inside one poll cycle.
///
/// None of these propagate past the poll boundary: the poller converts each
/// variant into a one-line diagnostic with `status_line`, because the text
/// region a bar hands us has no separate error channel.
#[derive(Debug, Clone, Error)]
pub enum PollError {
    /// API key or city id absent (or blank) in the configuration.
    #[error("missing API key or city ID")]
    MissingConfig,

    /// The request never produced a usable response: DNS, connect,
    /// timeout, or a non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but did not carry the expected fields.
    #[error("data error: {0}")]
    Data(String),

    /// Failure modes outside the taxonomy above; custom `WeatherProvider`
    /// implementations report through this.
    #[error("{0}")]
    Unknown(String),
}

impl From<reqwest::Error> for PollError {
    fn from(err: reqwest::Error) -> Self {
        PollError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for PollError {
    fn from(err: serde_json::Error) -> Self {
        PollError::Data(err.to_string())
    }
}

impl PollError {
    /// The status line a bar should display for this failure.
    pub fn status_line(&self) -> String {
        match self {
            PollError::MissingConfig => "Weather: Missing API key or city ID".to_string(),
            PollError::Network(detail) => {
                format!("Weather: Network error - {}", truncate_detail(detail))
            }
            PollError::Data(detail) => {
                format!("Weather: Data error - {}", truncate_detail(detail))
            }
            PollError::Unknown(detail) => {
                format!("Weather: Error - {}", truncate_detail(detail))
            }
        }
    }
}

fn truncate_detail(detail: &str) -> String {
    // Bars give the widget a fixed-width slot; long reqwest messages would
    // push every other widget off screen.
    const MAX: usize = 20;
    if detail.chars().count() > MAX {
        let cut: String = detail.chars().take(MAX).collect();
        format!("{cut}...")
    } else {
        detail.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_line_is_fixed() {
        assert_eq!(
            PollError::MissingConfig.status_line(),
            "Weather: Missing API key or city ID"
        );
    }

    #[test]
    fn each_kind_has_its_own_prefix() {
        let network = PollError::Network("timed out".to_string());
        let data = PollError::Data("missing field".to_string());
        let unknown = PollError::Unknown("boom".to_string());

        assert_eq!(network.status_line(), "Weather: Network error - timed out");
        assert_eq!(data.status_line(), "Weather: Data error - missing field");
        assert_eq!(unknown.status_line(), "Weather: Error - boom");
    }

    #[test]
    fn long_detail_is_cut_at_twenty_chars() {
        let err = PollError::Network(
            "error sending request for url (https://api.openweathermap.org/)".to_string(),
        );
        assert_eq!(
            err.status_line(),
            "Weather: Network error - error sending reques..."
        );
    }

    #[test]
    fn exactly_twenty_chars_is_left_alone() {
        // "connection timed out" is 20 characters on the nose.
        let err = PollError::Network("connection timed out".to_string());
        assert_eq!(
            err.status_line(),
            "Weather: Network error - connection timed out"
        );
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let err = PollError::Data("répondeur météo défaillant".to_string());
        let line = err.status_line();
        assert!(line.starts_with("Weather: Data error - répondeur météo déf"));
        assert!(line.ends_with("..."));
    }

    #[test]
    fn serde_failures_map_to_data() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PollError = parse_err.into();
        assert!(matches!(err, PollError::Data(_)));
    }
}
