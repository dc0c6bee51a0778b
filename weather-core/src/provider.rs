use crate::{
    Config, FetchError, Query, WeatherRecord, provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod weatherapi;

/// Source of current conditions. Implementations own the translation from
/// their wire format into [`WeatherRecord`].
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, query: &Query) -> Result<WeatherRecord, FetchError>;
}

/// Construct the provider from config and an already-resolved API key.
pub fn provider_from_config(
    config: &Config,
    api_key: String,
) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let provider = WeatherApiProvider::new(api_key, config.base_url())?;
    Ok(Arc::new(provider))
}
