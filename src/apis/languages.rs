use super::base::ProviderParser;
use super::cursor::Cursor;
use crate::constants::LANGUAGES_PROVIDER;
use crate::domain::Language;
use crate::error::Result;
use crate::xml::XmlDocument;

/// oorsprong.org CountryInfoService `ListOfLanguagesByName`
pub struct LanguagesParser;

impl Default for LanguagesParser {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguagesParser {
    pub fn new() -> Self {
        Self
    }
}

impl ProviderParser for LanguagesParser {
    type Record = Language;

    fn provider_name(&self) -> &'static str {
        LANGUAGES_PROVIDER
    }

    fn parse_document(&self, document: &XmlDocument) -> Result<Vec<Language>> {
        Cursor::root(LANGUAGES_PROVIDER, document, "ArrayOftLanguage")?
            .each("tLanguage")?
            .iter()
            .map(|language| {
                Ok(Language {
                    iso_code: language.required_text("sISOCode")?.to_string(),
                    name: language.required_text("sName")?.to_string(),
                })
            })
            .collect()
    }
}
