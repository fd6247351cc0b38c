use crate::domain::Language as DomainLanguage;
use async_graphql::Object;

#[derive(Clone)]
pub struct Language {
    pub inner: DomainLanguage,
}

impl From<DomainLanguage> for Language {
    fn from(language: DomainLanguage) -> Self {
        Self { inner: language }
    }
}

#[Object]
impl Language {
    async fn iso_code(&self) -> &str {
        &self.inner.iso_code
    }

    async fn name(&self) -> &str {
        &self.inner.name
    }
}
