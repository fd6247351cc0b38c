use crate::error::Result;
use async_trait::async_trait;

/// Outbound HTTP boundary used by the provider adapters.
///
/// One call is one GET attempt. Implementations return the response body as
/// text, `GatewayError::Network` for transport failures and
/// `GatewayError::UpstreamStatus` for non-success statuses.
#[async_trait]
pub trait HttpClientPort: Send + Sync {
    async fn get_text(&self, url: &str, headers: &[(&str, &str)]) -> Result<String>;
}
