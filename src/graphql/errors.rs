use crate::error::GatewayError;
use async_graphql::{Error, ErrorExtensions};

impl ErrorExtensions for GatewayError {
    fn extend(&self) -> Error {
        Error::new(self.to_string()).extend_with(|_, e| {
            e.set("kind", self.kind());
            match self {
                GatewayError::UpstreamStatus { status, .. } => e.set("status", i32::from(*status)),
                GatewayError::SchemaMismatch { provider, .. } => e.set("provider", *provider),
                _ => {}
            }
        })
    }
}
