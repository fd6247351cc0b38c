use crate::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECONDS, EVENTS_URL, LANGUAGES_URL, RATES_URL,
    USER_AGENT,
};
use crate::error::{GatewayError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Expose Prometheus metrics on `/metrics`
    pub metrics: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
    pub rates_url: String,
    pub events_url: String,
    pub languages_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            metrics: true,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: USER_AGENT.to_string(),
            rates_url: RATES_URL.to_string(),
            events_url: EVENTS_URL.to_string(),
            languages_url: LANGUAGES_URL.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Config {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(path).map_err(|e| {
            GatewayError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.upstream.timeout_seconds == 0 {
            return Err(GatewayError::Config(
                "upstream.timeout_seconds must be greater than zero".into(),
            ));
        }
        for (key, url) in [
            ("rates_url", &self.upstream.rates_url),
            ("events_url", &self.upstream.events_url),
            ("languages_url", &self.upstream.languages_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(GatewayError::Config(format!(
                    "upstream.{key} must be an absolute http(s) URL, got '{url}'"
                )));
            }
        }
        Ok(())
    }
}
