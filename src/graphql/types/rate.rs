use crate::domain::Rate as DomainRate;
use async_graphql::Object;

/// GraphQL representation of an NBP mid exchange rate
#[derive(Clone)]
pub struct Rate {
    pub inner: DomainRate,
}

impl From<DomainRate> for Rate {
    fn from(rate: DomainRate) -> Self {
        Self { inner: rate }
    }
}

#[Object]
impl Rate {
    /// ISO 4217 currency code
    async fn code(&self) -> &str {
        &self.inner.code
    }

    /// Currency name as published by the bank
    async fn currency(&self) -> &str {
        &self.inner.currency
    }

    /// Mid rate against PLN
    async fn mid(&self) -> f64 {
        self.inner.mid
    }
}
