use super::base::ProviderParser;
use super::cursor::Cursor;
use crate::constants::EVENTS_PROVIDER;
use crate::domain::Event;
use crate::error::Result;
use crate::xml::XmlDocument;
use std::collections::HashSet;

const HEADERS: &[(&str, &str)] = &[("accept", "application/xml")];

/// Câmara dos Deputados open-data events, requested in ascending start order.
///
/// Records are returned in document order; upstream ordering is trusted.
pub struct EventsParser;

impl Default for EventsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl EventsParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_event(event: &Cursor<'_>) -> Result<Event> {
        Ok(Event {
            id: event.parse("id", "integer id")?,
            uri: event.required_text("uri")?.to_string(),
            description: event.text("descricao")?.to_string(),
            description_type: event.text("descricaoTipo")?.to_string(),
            start_time: event.required_text("dataHoraInicio")?.to_string(),
            end_time: event.optional_text("dataHoraFim").map(str::to_string),
        })
    }
}

impl ProviderParser for EventsParser {
    type Record = Event;

    fn provider_name(&self) -> &'static str {
        EVENTS_PROVIDER
    }

    fn headers(&self) -> &'static [(&'static str, &'static str)] {
        HEADERS
    }

    fn parse_document(&self, document: &XmlDocument) -> Result<Vec<Event>> {
        let items = Cursor::root(EVENTS_PROVIDER, document, "xml")?
            .first("dados")?
            .each("evento_")?;

        let mut seen = HashSet::with_capacity(items.len());
        let mut events = Vec::with_capacity(items.len());
        for item in &items {
            let event = Self::parse_event(item)?;
            if !seen.insert(event.id) {
                return Err(item.mismatch(format!("duplicate event id {}", event.id)));
            }
            events.push(event);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GatewayError;
    use crate::xml::decode_str;

    fn evento(id: &str, start: &str, end: &str) -> String {
        format!(
            "<evento_>\
               <id>{id}</id>\
               <uri>https://dadosabertos.camara.leg.br/api/v2/eventos/{id}</uri>\
               <dataHoraInicio>{start}</dataHoraInicio>\
               {end}\
               <situacao>Encerrada</situacao>\
               <descricaoTipo>Audiência Pública</descricaoTipo>\
               <descricao>Debate sobre\n   orçamento</descricao>\
               <localExterno/>\
               <orgaos><orgao_><id>2003</id><sigla>CCJC</sigla></orgao_></orgaos>\
             </evento_>"
        )
    }

    fn feed(events: &[String]) -> String {
        format!(
            "<xml><dados>{}</dados><links><link><rel>self</rel></link></links></xml>",
            events.concat()
        )
    }

    fn parse(xml: &str) -> Result<Vec<Event>> {
        EventsParser::new().parse_document(&decode_str(xml).unwrap())
    }

    #[test]
    fn test_event_fields_are_mapped() {
        let events = parse(&feed(&[evento(
            "71234",
            "2024-05-20T09:00",
            "<dataHoraFim>2024-05-20T12:30</dataHoraFim>",
        )]))
        .unwrap();

        assert_eq!(
            events,
            vec![Event {
                id: 71234,
                uri: "https://dadosabertos.camara.leg.br/api/v2/eventos/71234".into(),
                description: "Debate sobre orçamento".into(),
                description_type: "Audiência Pública".into(),
                start_time: "2024-05-20T09:00".into(),
                end_time: Some("2024-05-20T12:30".into()),
            }]
        );
    }

    #[test]
    fn test_document_order_is_preserved() {
        // deliberately not sorted by id or start time
        let events = parse(&feed(&[
            evento("3", "2024-05-20T11:00", ""),
            evento("1", "2024-05-20T09:00", ""),
            evento("2", "2024-05-20T10:00", ""),
        ]))
        .unwrap();

        let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_ongoing_event_has_no_end_time() {
        let events = parse(&feed(&[
            evento("1", "2024-05-20T09:00", "<dataHoraFim/>"),
            evento("2", "2024-05-20T10:00", ""),
        ]))
        .unwrap();

        assert_eq!(events[0].end_time, None);
        assert_eq!(events[1].end_time, None);
    }

    #[test]
    fn test_non_numeric_id_is_a_mismatch() {
        let err = parse(&feed(&[evento("abc", "2024-05-20T09:00", "")])).unwrap_err();
        assert!(matches!(err, GatewayError::SchemaMismatch { provider, .. } if provider == EVENTS_PROVIDER));
    }

    #[test]
    fn test_duplicate_id_is_a_mismatch() {
        let err = parse(&feed(&[
            evento("7", "2024-05-20T09:00", ""),
            evento("7", "2024-05-20T10:00", ""),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("duplicate event id 7"));
    }

    #[test]
    fn test_missing_dados_is_a_mismatch() {
        let err = parse("<xml><links/></xml>").unwrap_err();
        assert!(err.to_string().contains("xml/dados"));
    }

    #[test]
    fn test_no_events_scheduled() {
        assert!(parse("<xml><dados/><links/></xml>").unwrap().is_empty());
    }

    #[test]
    fn test_requests_xml() {
        assert_eq!(
            EventsParser::new().headers(),
            &[("accept", "application/xml")]
        );
    }
}
