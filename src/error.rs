use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("upstream {url} responded with HTTP {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("malformed XML at byte {position}: {message}")]
    MalformedXml { message: String, position: u64 },

    #[error("unexpected {provider} response: {message}")]
    SchemaMismatch {
        provider: &'static str,
        message: String,
    },

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl GatewayError {
    /// Machine-readable kind reported to GraphQL callers.
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Network { .. } => "NETWORK_ERROR",
            GatewayError::UpstreamStatus { .. } => "UPSTREAM_STATUS_ERROR",
            GatewayError::MalformedXml { .. } => "MALFORMED_XML",
            GatewayError::SchemaMismatch { .. } => "SCHEMA_MISMATCH",
            GatewayError::Validation(_) => "VALIDATION_ERROR",
            GatewayError::Config(_)
            | GatewayError::Toml(_)
            | GatewayError::Io(_)
            | GatewayError::Task(_) => "INTERNAL_ERROR",
        }
    }

    pub(crate) fn schema(provider: &'static str, message: impl Into<String>) -> Self {
        GatewayError::SchemaMismatch {
            provider,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_are_distinct_per_failure_class() {
        let status = GatewayError::UpstreamStatus {
            url: "http://example.test".into(),
            status: 503,
        };
        let xml = GatewayError::MalformedXml {
            message: "unexpected end".into(),
            position: 12,
        };
        let schema = GatewayError::schema("rates", "missing `Rates`");
        let validation = GatewayError::Validation("title must not be blank".into());

        assert_eq!(status.kind(), "UPSTREAM_STATUS_ERROR");
        assert_eq!(xml.kind(), "MALFORMED_XML");
        assert_eq!(schema.kind(), "SCHEMA_MISMATCH");
        assert_eq!(validation.kind(), "VALIDATION_ERROR");
        assert_eq!(GatewayError::Config("bad".into()).kind(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_messages_are_human_readable() {
        let status = GatewayError::UpstreamStatus {
            url: "http://example.test/rates".into(),
            status: 404,
        };
        assert_eq!(
            status.to_string(),
            "upstream http://example.test/rates responded with HTTP 404"
        );

        let schema = GatewayError::schema("events", "missing element `xml/dados`");
        assert_eq!(
            schema.to_string(),
            "unexpected events response: missing element `xml/dados`"
        );
    }
}
