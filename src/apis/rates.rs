use super::base::ProviderParser;
use super::cursor::Cursor;
use crate::constants::RATES_PROVIDER;
use crate::domain::Rate;
use crate::error::Result;
use crate::xml::XmlDocument;

/// NBP exchange-rate table A
pub struct RatesParser;

impl Default for RatesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RatesParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_rate(rate: &Cursor<'_>) -> Result<Rate> {
        let mid: f64 = rate.parse("Mid", "number")?;
        if !mid.is_finite() {
            return Err(rate.mismatch(format!("`Mid` is not a finite number: {mid}")));
        }

        Ok(Rate {
            code: rate.required_text("Code")?.to_string(),
            currency: rate.required_text("Currency")?.to_string(),
            mid,
        })
    }
}

impl ProviderParser for RatesParser {
    type Record = Rate;

    fn provider_name(&self) -> &'static str {
        RATES_PROVIDER
    }

    fn parse_document(&self, document: &XmlDocument) -> Result<Vec<Rate>> {
        Cursor::root(RATES_PROVIDER, document, "ArrayOfExchangeRatesTable")?
            .first("ExchangeRatesTable")?
            .first("Rates")?
            .each("Rate")?
            .iter()
            .map(Self::parse_rate)
            .collect()
    }
}
