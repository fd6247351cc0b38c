use crate::app::ports::HttpClientPort;
use crate::config::UpstreamConfig;
use crate::error::{GatewayError, Result};
use crate::observability::metrics::upstream;
use async_trait::async_trait;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// reqwest-backed fetch client. Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct ReqwestHttp {
    client: reqwest::Client,
}

impl ReqwestHttp {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| GatewayError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent)
    }
}

#[async_trait]
impl HttpClientPort for ReqwestHttp {
    async fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<String> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let started = Instant::now();
        let response = request.send().await.map_err(|source| {
            upstream::request_error();
            warn!(url, error = %source, "Upstream request failed");
            GatewayError::Network {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            upstream::request_error();
            warn!(url, status = status.as_u16(), "Upstream returned non-success status");
            return Err(GatewayError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| {
            upstream::request_error();
            GatewayError::Network {
                url: url.to_string(),
                source,
            }
        })?;

        let elapsed = started.elapsed().as_secs_f64();
        upstream::request_success();
        upstream::request_duration(elapsed);
        upstream::payload_bytes(body.len());
        debug!(url, bytes = body.len(), elapsed, "Fetched upstream payload");

        Ok(body)
    }
}
