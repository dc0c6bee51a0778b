use serde::{Deserialize, Serialize};

/// A trimmed, non-empty city name, ready to be sent to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() { None } else { Some(Self(trimmed.to_string())) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current conditions for one location, independent of any provider's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub name: String,
    pub country: String,
    pub temp_c: f64,
    pub feels_like_c: f64,
    pub humidity: u8,
    pub condition: String,
    pub description: String,
    /// Always an absolute `https://` URL.
    pub icon_url: String,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub uv: f64,
    pub cloud: u8,
    /// Provider-local timestamp, e.g. `2024-01-15 14:30`.
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success(WeatherRecord),
    Failed(String),
}

impl RequestStatus {
    pub fn record(&self) -> Option<&WeatherRecord> {
        match self {
            RequestStatus::Success(record) => Some(record),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let q = Query::parse("  Paris \n").expect("non-empty query");
        assert_eq!(q.as_str(), "Paris");
    }

    #[test]
    fn blank_query_is_rejected() {
        assert!(Query::parse("").is_none());
        assert!(Query::parse("   \t ").is_none());
    }

    #[test]
    fn status_accessors() {
        assert!(RequestStatus::Loading.is_loading());
        assert_eq!(RequestStatus::Failed("boom".into()).error_message(), Some("boom"));
        assert!(RequestStatus::Idle.record().is_none());
    }
}
