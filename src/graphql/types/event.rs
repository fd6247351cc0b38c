use crate::domain::Event as DomainEvent;
use async_graphql::Object;

/// GraphQL representation of a Chamber of Deputies event
#[derive(Clone)]
pub struct Event {
    pub inner: DomainEvent,
}

impl From<DomainEvent> for Event {
    fn from(event: DomainEvent) -> Self {
        Self { inner: event }
    }
}

#[Object]
impl Event {
    /// The upstream identifier for the event
    async fn id(&self) -> i64 {
        self.inner.id
    }

    /// Link to the event in the open-data API
    async fn uri(&self) -> &str {
        &self.inner.uri
    }

    /// Description of the event
    async fn description(&self) -> &str {
        &self.inner.description
    }

    /// Kind of event, e.g. a public hearing
    async fn description_type(&self) -> &str {
        &self.inner.description_type
    }

    /// Start timestamp as published upstream
    async fn start_time(&self) -> &str {
        &self.inner.start_time
    }

    /// End timestamp; null while the event is ongoing
    async fn end_time(&self) -> Option<&str> {
        self.inner.end_time.as_deref()
    }
}
