use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::{FetchError, Query, WeatherRecord};

use super::WeatherProvider;

const CDN_HOST: &str = "cdn.weatherapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String, base_url: &str) -> Result<Self, FetchError> {
        Self::with_timeout(api_key, base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { api_key, base_url: base_url.trim_end_matches('/').to_string(), http })
    }

    async fn fetch_current(&self, query: &Query) -> Result<WeatherRecord, FetchError> {
        let url = format!("{}/current.json", self.base_url);
        tracing::debug!(%url, query = %query, "requesting current conditions");

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query.as_str()), ("aqi", "no")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Provider { status, message: error_message(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        Ok(parsed.into())
    }
}

impl std::fmt::Debug for WeatherApiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiProvider")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: u8,
    condition: WaCondition,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    uv: f64,
    cloud: u8,
    last_updated: String,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

#[derive(Debug, Deserialize)]
struct WaErrorBody {
    error: WaErrorDetail,
}

#[derive(Debug, Deserialize)]
struct WaErrorDetail {
    message: String,
}

impl From<WaResponse> for WeatherRecord {
    fn from(res: WaResponse) -> Self {
        let WaResponse { location, current } = res;

        Self {
            name: location.name,
            country: location.country,
            temp_c: current.temp_c,
            feels_like_c: current.feelslike_c,
            humidity: current.humidity,
            // WeatherAPI has a single text field for both.
            description: current.condition.text.clone(),
            condition: current.condition.text,
            icon_url: secure_icon_url(&current.condition.icon),
            wind_kph: current.wind_kph,
            wind_dir: current.wind_dir,
            pressure_mb: current.pressure_mb,
            uv: current.uv,
            cloud: current.cloud,
            last_updated: current.last_updated,
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &Query) -> Result<WeatherRecord, FetchError> {
        self.fetch_current(query).await
    }
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<WaErrorBody>(body)
        .ok()
        .map(|b| b.error.message)
        .filter(|m| !m.trim().is_empty())
}

/// WeatherAPI serves icons as `//cdn.weatherapi.com/...`; turn that into an explicit https URL.
fn secure_icon_url(icon: &str) -> String {
    if icon.starts_with("https://") {
        icon.to_string()
    } else if let Some(rest) = icon.strip_prefix("http://") {
        format!("https://{rest}")
    } else if let Some(rest) = icon.strip_prefix("//") {
        format!("https://{rest}")
    } else if icon.starts_with(CDN_HOST) {
        format!("https://{icon}")
    } else if icon.starts_with('/') {
        format!("https://{CDN_HOST}{icon}")
    } else {
        icon.to_string()
    }
}
