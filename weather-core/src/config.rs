use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// WeatherAPI.com endpoint root used when the config does not override it.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Environment variable consulted when no key is passed on the command line.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

/// Credentials and endpoint for the weather provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// [weatherapi]
    /// api_key = "..."
    pub weatherapi: Option<ProviderConfig>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Set or replace the API key, keeping any endpoint override.
    pub fn set_api_key(&mut self, api_key: String) {
        match &mut self.weatherapi {
            Some(provider) => provider.api_key = api_key,
            None => self.weatherapi = Some(ProviderConfig { api_key, base_url: None }),
        }
    }

    /// Returns the stored API key, if present.
    pub fn api_key(&self) -> Option<&str> {
        self.weatherapi
            .as_ref()
            .map(|cfg| cfg.api_key.as_str())
            .filter(|key| !key.trim().is_empty())
    }

    pub fn base_url(&self) -> &str {
        self.weatherapi
            .as_ref()
            .and_then(|cfg| cfg.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// Resolve the key to use at startup: explicit flag, then environment, then file.
    pub fn resolve_api_key(&self, explicit: Option<String>) -> Result<String> {
        let from_env = std::env::var(API_KEY_ENV).ok();
        select_api_key(explicit, from_env, self.api_key()).ok_or_else(|| {
            anyhow!(
                "No API key configured for WeatherAPI.com.\n\
                 Hint: run `weather configure`, set {API_KEY_ENV}, or pass --api-key."
            )
        })
    }
}

fn select_api_key(
    explicit: Option<String>,
    from_env: Option<String>,
    stored: Option<&str>,
) -> Option<String> {
    explicit
        .into_iter()
        .chain(from_env)
        .chain(stored.map(str::to_owned))
        .find(|key| !key.trim().is_empty())
}
