//! Failures of a single provider fetch and the messages shown for them.

use reqwest::StatusCode;
use thiserror::Error;

/// Shown when the provider answered with an error status but no readable reason.
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Please try again.";

/// Shown for everything else: unreachable network, timeouts, malformed bodies.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Weather provider answered with status {status}: {}", .message.as_deref().unwrap_or("no details"))]
    Provider { status: StatusCode, message: Option<String> },

    #[error("Failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse the weather provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Message for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider { message: Some(message), .. } => message.clone(),
            Self::Provider { message: None, .. } => CITY_NOT_FOUND_MESSAGE.to_string(),
            Self::Transport(_) | Self::Decode(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_message_is_surfaced_verbatim() {
        let err = FetchError::Provider {
            status: StatusCode::BAD_REQUEST,
            message: Some("No matching location found.".into()),
        };
        assert_eq!(err.user_message(), "No matching location found.");
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn provider_error_without_message_falls_back() {
        let err = FetchError::Provider { status: StatusCode::NOT_FOUND, message: None };
        assert_eq!(err.user_message(), CITY_NOT_FOUND_MESSAGE);
        assert!(err.to_string().contains("no details"));
    }

    #[test]
    fn decode_error_uses_generic_message() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
