//! Generic XML decoding.
//!
//! A document decodes into a tree of [`XmlNode`]s. Every child element is
//! stored under its (local) name as a *sequence* of occurrences, so callers
//! always index into position 0 for elements that occur once. Attributes are
//! not retained; CDATA counts as text; text is trimmed and internal
//! whitespace runs collapse to a single space.

use crate::error::{GatewayError, Result};
use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;
use std::collections::BTreeMap;

/// One decoded element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    text: String,
    children: BTreeMap<String, Vec<XmlNode>>,
}

/// A decoded document: the root element and its name
#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root_name: String,
    pub root: XmlNode,
}

impl XmlNode {
    /// Normalized text content; empty when the element has none
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All occurrences of the child element `name`, in document order
    pub fn children(&self, name: &str) -> &[XmlNode] {
        self.children.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, name: &str) -> Option<&XmlNode> {
        self.children(name).first()
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True for `<x/>` and `<x>  </x>`
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.children.is_empty()
    }

    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }
}

/// Decode `input` without blocking the async scheduler.
pub async fn decode(input: String) -> Result<XmlDocument> {
    tokio::task::spawn_blocking(move || decode_str(&input)).await?
}

/// Decode a complete XML document.
pub fn decode_str(input: &str) -> Result<XmlDocument> {
    // Text is kept untrimmed so chunks split by comments or CDATA join exactly;
    // whitespace is normalized once the element closes.
    let mut reader = Reader::from_str(input.trim_start_matches('\u{feff}'));

    let mut stack: Vec<(String, XmlNode)> = Vec::new();
    let mut document: Option<XmlDocument> = None;

    loop {
        let event = reader.read_event().map_err(|e| GatewayError::MalformedXml {
            message: e.to_string(),
            position: reader.buffer_position() as u64,
        })?;
        let position = reader.buffer_position() as u64;

        match event {
            XmlEvent::Start(start) => {
                ensure_single_root(&stack, &document, position)?;
                let name = element_name(start.local_name().as_ref(), position)?;
                stack.push((name, XmlNode::default()));
            }
            XmlEvent::Empty(start) => {
                ensure_single_root(&stack, &document, position)?;
                let name = element_name(start.local_name().as_ref(), position)?;
                close_element(&mut stack, &mut document, name, XmlNode::default());
            }
            XmlEvent::End(_) => {
                // quick-xml already rejects mismatched end tags
                let (name, node) = stack.pop().ok_or_else(|| GatewayError::MalformedXml {
                    message: "closing tag without a matching opening tag".into(),
                    position,
                })?;
                close_element(&mut stack, &mut document, name, node);
            }
            XmlEvent::Text(text) => {
                let value = text.unescape().map_err(|e| GatewayError::MalformedXml {
                    message: e.to_string(),
                    position,
                })?;
                append_text(&mut stack, &value, position)?;
            }
            XmlEvent::CData(data) => {
                let value = std::str::from_utf8(&data).map_err(|e| GatewayError::MalformedXml {
                    message: format!("CDATA is not valid UTF-8: {e}"),
                    position,
                })?;
                append_text(&mut stack, value, position)?;
            }
            XmlEvent::Eof => break,
            // declarations, comments, processing instructions, doctypes
            _ => {}
        }
    }

    if let Some((name, _)) = stack.last() {
        return Err(GatewayError::MalformedXml {
            message: format!("unexpected end of document: `<{name}>` is not closed"),
            position: reader.buffer_position() as u64,
        });
    }

    document.ok_or_else(|| GatewayError::MalformedXml {
        message: "document has no root element".into(),
        position: reader.buffer_position() as u64,
    })
}

fn element_name(raw: &[u8], position: u64) -> Result<String> {
    std::str::from_utf8(raw)
        .map(str::to_string)
        .map_err(|e| GatewayError::MalformedXml {
            message: format!("element name is not valid UTF-8: {e}"),
            position,
        })
}

fn ensure_single_root(
    stack: &[(String, XmlNode)],
    document: &Option<XmlDocument>,
    position: u64,
) -> Result<()> {
    match document {
        Some(doc) if stack.is_empty() => Err(GatewayError::MalformedXml {
            message: format!("second root element after `<{}>`", doc.root_name),
            position,
        }),
        _ => Ok(()),
    }
}

fn append_text(stack: &mut [(String, XmlNode)], value: &str, position: u64) -> Result<()> {
    match stack.last_mut() {
        Some((_, node)) => {
            node.text.push_str(value);
            Ok(())
        }
        None if value.trim().is_empty() => Ok(()),
        None => Err(GatewayError::MalformedXml {
            message: "text outside of the root element".into(),
            position,
        }),
    }
}

fn close_element(
    stack: &mut [(String, XmlNode)],
    document: &mut Option<XmlDocument>,
    name: String,
    mut node: XmlNode,
) {
    node.text = normalize_whitespace(&node.text);
    match stack.last_mut() {
        Some((_, parent)) => parent.children.entry(name).or_default().push(node),
        None => {
            *document = Some(XmlDocument {
                root_name: name,
                root: node,
            })
        }
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(nodes: &[XmlNode]) -> Vec<&str> {
        nodes.iter().map(XmlNode::text).collect()
    }

    #[test]
    fn test_single_element_is_a_one_item_sequence() {
        let doc = decode_str("<Rate><Code>PLN</Code></Rate>").unwrap();
        assert_eq!(doc.root_name, "Rate");
        assert_eq!(texts(doc.root.children("Code")), vec!["PLN"]);
        assert_eq!(doc.root.first("Code").unwrap().text(), "PLN");
    }

    #[test]
    fn test_repeated_elements_keep_document_order() {
        let doc = decode_str("<Rate><Code>PLN</Code><Code>USD</Code></Rate>").unwrap();
        assert_eq!(texts(doc.root.children("Code")), vec!["PLN", "USD"]);
    }

    #[test]
    fn test_repetition_is_tracked_per_parent() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
            <Table>
              <Rate><Code>PLN</Code></Rate>
              <Rate><Code>USD</Code><Code>EUR</Code></Rate>
            </Table>"#;
        let doc = decode_str(xml).unwrap();
        let rates = doc.root.children("Rate");
        assert_eq!(rates.len(), 2);
        assert_eq!(texts(rates[0].children("Code")), vec!["PLN"]);
        assert_eq!(texts(rates[1].children("Code")), vec!["USD", "EUR"]);
    }

    #[test]
    fn test_whitespace_is_trimmed_and_collapsed() {
        let doc = decode_str("<a><b>\n   Audiência   pública \n\t sobre  orçamento </b></a>").unwrap();
        assert_eq!(doc.root.first("b").unwrap().text(), "Audiência pública sobre orçamento");
    }

    #[test]
    fn test_entities_and_cdata_are_text() {
        let doc =
            decode_str("<a><b>Tom &amp; Jerry</b><c><![CDATA[1 < 2]]></c></a>").unwrap();
        assert_eq!(doc.root.first("b").unwrap().text(), "Tom & Jerry");
        assert_eq!(doc.root.first("c").unwrap().text(), "1 < 2");
    }

    #[test]
    fn test_text_split_by_comment_or_cdata_is_joined_exactly() {
        let doc =
            decode_str("<Rate><Code>PL<!-- x -->N</Code><Mid>4.<![CDATA[25]]></Mid></Rate>")
                .unwrap();
        assert_eq!(doc.root.first("Code").unwrap().text(), "PLN");
        assert_eq!(doc.root.first("Mid").unwrap().text(), "4.25");
    }

    #[test]
    fn test_whitespace_around_split_text_still_collapses() {
        let doc = decode_str("<a><b>  one <!-- c -->  two <![CDATA[ three ]]> </b></a>").unwrap();
        assert_eq!(doc.root.first("b").unwrap().text(), "one two three");
    }

    #[test]
    fn test_empty_elements_have_empty_text() {
        let doc = decode_str("<a><end/><other>  </other></a>").unwrap();
        assert!(doc.root.first("end").unwrap().is_empty());
        assert!(doc.root.first("other").unwrap().is_empty());
        assert!(doc.root.children("missing").is_empty());
    }

    #[test]
    fn test_attributes_and_namespace_prefixes_are_dropped() {
        let xml = r#"<m:ArrayOftLanguage xmlns:m="http://www.oorsprong.org/websamples.countryinfo">
            <m:tLanguage kind="x"><m:sISOCode>pl</m:sISOCode></m:tLanguage>
        </m:ArrayOftLanguage>"#;
        let doc = decode_str(xml).unwrap();
        assert_eq!(doc.root_name, "ArrayOftLanguage");
        let language = doc.root.first("tLanguage").unwrap();
        assert_eq!(language.first("sISOCode").unwrap().text(), "pl");
        assert_eq!(language.child_names().collect::<Vec<_>>(), vec!["sISOCode"]);
    }

    #[test]
    fn test_comments_and_leading_bom_are_ignored() {
        let doc = decode_str("\u{feff}<?xml version=\"1.0\"?><!-- feed --><a><b>1</b></a>").unwrap();
        assert_eq!(doc.root.first("b").unwrap().text(), "1");
    }

    #[test]
    fn test_mismatched_end_tag_is_malformed() {
        let err = decode_str("<a><b>1</c></a>").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedXml { .. }), "{err:?}");
    }

    #[test]
    fn test_unclosed_element_is_malformed() {
        let err = decode_str("<a><b>1</b>").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedXml { .. }), "{err:?}");
    }

    #[test]
    fn test_empty_and_non_xml_input_is_malformed() {
        assert!(matches!(decode_str(""), Err(GatewayError::MalformedXml { .. })));
        assert!(matches!(
            decode_str("{\"rates\": []}"),
            Err(GatewayError::MalformedXml { .. })
        ));
    }

    #[test]
    fn test_second_root_is_malformed() {
        let err = decode_str("<a/><b/>").unwrap_err();
        assert!(matches!(err, GatewayError::MalformedXml { .. }));
    }

    #[tokio::test]
    async fn test_async_decode_matches_sync_decode() {
        let xml = "<a><b>1</b><b>2</b></a>".to_string();
        let expected = decode_str(&xml).unwrap();
        assert_eq!(decode(xml).await.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_async_decode_reports_malformed_input() {
        let err = decode("<a>".to_string()).await.unwrap_err();
        assert_eq!(err.kind(), "MALFORMED_XML");
    }
}
