use crate::error::{GatewayError, Result};
use crate::xml::{XmlDocument, XmlNode};
use std::fmt::Display;
use std::str::FromStr;

/// Position inside a decoded document, tracking the path walked so far so
/// schema errors can name exactly which segment was missing.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    provider: &'static str,
    path: String,
    node: &'a XmlNode,
}

impl<'a> Cursor<'a> {
    /// Start at the document root, which must be named `expected`.
    pub fn root(provider: &'static str, document: &'a XmlDocument, expected: &str) -> Result<Self> {
        if document.root_name != expected {
            return Err(GatewayError::schema(
                provider,
                format!(
                    "expected root element `{expected}`, found `{}`",
                    document.root_name
                ),
            ));
        }
        Ok(Self {
            provider,
            path: expected.to_string(),
            node: &document.root,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// First occurrence of the child element `name`.
    pub fn first(&self, name: &str) -> Result<Cursor<'a>> {
        let node = self.node.first(name).ok_or_else(|| self.missing(name))?;
        Ok(Cursor {
            provider: self.provider,
            path: format!("{}/{}", self.path, name),
            node,
        })
    }

    /// Every occurrence of the child element `name`.
    ///
    /// A completely empty container yields no records; a container holding
    /// other content but no `name` children means the shape changed.
    pub fn each(&self, name: &str) -> Result<Vec<Cursor<'a>>> {
        let nodes = self.node.children(name);
        if nodes.is_empty() && !self.node.is_empty() {
            return Err(self.missing(name));
        }
        Ok(nodes
            .iter()
            .enumerate()
            .map(|(index, node)| Cursor {
                provider: self.provider,
                path: format!("{}/{}[{}]", self.path, name, index),
                node,
            })
            .collect())
    }

    /// Text of the first `name` child; the element must exist but may be empty.
    pub fn text(&self, name: &str) -> Result<&'a str> {
        self.node
            .first(name)
            .map(XmlNode::text)
            .ok_or_else(|| self.missing(name))
    }

    /// Text of the first `name` child, which must exist and be non-empty.
    pub fn required_text(&self, name: &str) -> Result<&'a str> {
        let text = self.text(name)?;
        if text.is_empty() {
            return Err(GatewayError::schema(
                self.provider,
                format!("element `{}/{}` is empty", self.path, name),
            ));
        }
        Ok(text)
    }

    /// Text of the first `name` child; `None` when absent or empty.
    pub fn optional_text(&self, name: &str) -> Option<&'a str> {
        self.node
            .first(name)
            .map(XmlNode::text)
            .filter(|text| !text.is_empty())
    }

    /// Parse the text of the first `name` child. `what` names the expected
    /// type in the error message.
    pub fn parse<T>(&self, name: &str, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(name)?;
        raw.parse::<T>().map_err(|e| {
            GatewayError::schema(
                self.provider,
                format!("`{}/{}` is not a valid {what}: `{raw}` ({e})", self.path, name),
            )
        })
    }

    pub fn mismatch(&self, message: impl Display) -> GatewayError {
        GatewayError::schema(self.provider, format!("`{}`: {message}", self.path))
    }

    fn missing(&self, name: &str) -> GatewayError {
        GatewayError::schema(
            self.provider,
            format!("missing element `{}/{}`", self.path, name),
        )
    }
}
