use super::base::ProviderAdapter;
use super::events::EventsParser;
use super::languages::LanguagesParser;
use super::rates::RatesParser;
use crate::app::ports::HttpClientPort;
use crate::config::UpstreamConfig;
use crate::domain::{Event, Language, Rate};
use crate::error::Result;
use crate::infra::ReqwestHttp;
use std::sync::Arc;

pub type RateAdapter = ProviderAdapter<RatesParser>;
pub type EventAdapter = ProviderAdapter<EventsParser>;
pub type LanguageAdapter = ProviderAdapter<LanguagesParser>;

/// The three XML providers, sharing one fetch client
pub struct Providers {
    pub rates: RateAdapter,
    pub events: EventAdapter,
    pub languages: LanguageAdapter,
}

impl Providers {
    pub fn new(http: Arc<dyn HttpClientPort>, config: &UpstreamConfig) -> Self {
        Self {
            rates: ProviderAdapter::new(http.clone(), &config.rates_url, RatesParser::new()),
            events: ProviderAdapter::new(http.clone(), &config.events_url, EventsParser::new()),
            languages: ProviderAdapter::new(http, &config.languages_url, LanguagesParser::new()),
        }
    }

    /// Providers backed by a reqwest client built from `config`
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let http: Arc<dyn HttpClientPort> = Arc::new(ReqwestHttp::from_config(config)?);
        Ok(Self::new(http, config))
    }

    pub async fn fetch_rates(&self) -> Result<Vec<Rate>> {
        self.rates.fetch().await
    }

    pub async fn fetch_events(&self) -> Result<Vec<Event>> {
        self.events.fetch().await
    }

    pub async fn fetch_languages(&self) -> Result<Vec<Language>> {
        self.languages.fetch().await
    }
}
