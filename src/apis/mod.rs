// Provider adapters: fetch, decode, then walk each provider's XML shape
pub mod base;
pub mod cursor;
pub mod events;
pub mod factory;
pub mod languages;
pub mod rates;

pub use base::{ProviderAdapter, ProviderParser};
pub use events::EventsParser;
pub use factory::{EventAdapter, LanguageAdapter, Providers, RateAdapter};
pub use languages::LanguagesParser;
pub use rates::RatesParser;
