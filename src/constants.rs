/// Provider names used in logs, metrics labels and error messages
pub const RATES_PROVIDER: &str = "rates";
pub const EVENTS_PROVIDER: &str = "events";
pub const LANGUAGES_PROVIDER: &str = "languages";

// Default upstream endpoints
// API docs: https://api.nbp.pl/
pub const RATES_URL: &str = "http://api.nbp.pl/api/exchangerates/tables/A?format=xml";
// API docs: https://dadosabertos.camara.leg.br/swagger/api.html
pub const EVENTS_URL: &str =
    "https://dadosabertos.camara.leg.br/api/v2/eventos?ordem=ASC&ordenarPor=dataHoraInicio";
// API docs: http://webservices.oorsprong.org/websamples.countryinfo/CountryInfoService.wso
pub const LANGUAGES_URL: &str =
    "http://webservices.oorsprong.org/websamples.countryinfo/CountryInfoService.wso/ListOfLanguagesByName";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

pub const USER_AGENT: &str = concat!("feed_gateway/", env!("CARGO_PKG_VERSION"));

/// Convert a CLI provider name to the canonical provider name
pub fn provider_from_name(name: &str) -> Option<&'static str> {
    match name.trim().to_lowercase().as_str() {
        "rates" | "rate" | "nbp" => Some(RATES_PROVIDER),
        "events" | "event" | "camara" => Some(EVENTS_PROVIDER),
        "languages" | "language" | "oorsprong" => Some(LANGUAGES_PROVIDER),
        _ => None,
    }
}

/// Get all supported provider names
pub fn get_supported_providers() -> Vec<&'static str> {
    vec![RATES_PROVIDER, EVENTS_PROVIDER, LANGUAGES_PROVIDER]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_aliases() {
        assert_eq!(provider_from_name("Rates"), Some(RATES_PROVIDER));
        assert_eq!(provider_from_name(" camara "), Some(EVENTS_PROVIDER));
        assert_eq!(provider_from_name("language"), Some(LANGUAGES_PROVIDER));
        assert_eq!(provider_from_name("films"), None);
    }

    #[test]
    fn test_every_supported_provider_resolves_to_itself() {
        for name in get_supported_providers() {
            assert_eq!(provider_from_name(name), Some(name));
        }
    }
}
