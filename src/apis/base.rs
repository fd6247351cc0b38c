use crate::app::ports::HttpClientPort;
use crate::error::Result;
use crate::observability::metrics::adapter;
use crate::xml::{self, XmlDocument};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, instrument};

/// Provider-specific mapping from a decoded document to normalized records
pub trait ProviderParser: Send + Sync {
    type Record: Send;

    /// Name used in logs, metrics and error messages
    fn provider_name(&self) -> &'static str;

    /// Extra request headers the provider needs
    fn headers(&self) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Walk the decoded document and map every record
    fn parse_document(&self, document: &XmlDocument) -> Result<Vec<Self::Record>>;
}

/// Fetch, decode and map pipeline shared by every provider
pub struct ProviderAdapter<P> {
    http: Arc<dyn HttpClientPort>,
    url: String,
    parser: P,
}

impl<P: ProviderParser> ProviderAdapter<P> {
    pub fn new(http: Arc<dyn HttpClientPort>, url: impl Into<String>, parser: P) -> Self {
        Self {
            http,
            url: url.into(),
            parser,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.parser.provider_name()
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(provider = self.parser.provider_name()))]
    pub async fn fetch(&self) -> Result<Vec<P::Record>> {
        let provider = self.parser.provider_name();
        let started = Instant::now();
        let result = self.run().await;
        adapter::fetch_duration(provider, started.elapsed().as_secs_f64());

        match &result {
            Ok(records) => {
                info!("Normalized {} records from {}", records.len(), provider);
                adapter::fetch_success(provider, records.len());
            }
            Err(e) => {
                error!(kind = e.kind(), "Fetching {} failed: {}", provider, e);
                adapter::fetch_error(provider, e.kind());
            }
        }
        result
    }

    async fn run(&self) -> Result<Vec<P::Record>> {
        let body = self.http.get_text(&self.url, self.parser.headers()).await?;
        let document = xml::decode(body).await?;
        self.parser.parse_document(&document)
    }
}
