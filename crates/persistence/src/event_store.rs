//! Document-store implementation of the domain event store.

use domain::models::{EventFilter, EventPage, SecurityEvent};
use domain::services::{EventStore, StoreError};

use crate::client::{query, DocumentClient};
use crate::documents::{SecurityEventDocument, StoredSecurityEvent, SECURITY_EVENTS_COLLECTION};

/// Event store backed by the external document store.
#[derive(Debug, Clone)]
pub struct DocumentEventStore {
    client: DocumentClient,
}

impl DocumentEventStore {
    /// Create a new document-backed event store.
    pub fn new(client: DocumentClient) -> Self {
        Self { client }
    }

    /// Translates a domain filter into store query expressions.
    fn build_queries(filter: &EventFilter) -> Vec<String> {
        let mut queries = Vec::new();

        if let Some(camera_name) = &filter.camera_name {
            queries.push(query::equal("cameraName", camera_name));
        }
        if let Some(severity) = filter.severity {
            queries.push(query::equal("severity", severity.as_str()));
        }
        if let Some(event_type) = filter.event_type {
            queries.push(query::equal("type", event_type.as_str()));
        }
        if let Some(since) = filter.since {
            queries.push(query::greater_than_equal("timestamp", &since.to_rfc3339()));
        }

        queries.push(query::order_desc("timestamp"));

        if filter.limit > 0 {
            queries.push(query::limit(filter.limit));
        }

        queries
    }
}

#[async_trait::async_trait]
impl EventStore for DocumentEventStore {
    async fn create(&self, event: &SecurityEvent) -> Result<(), StoreError> {
        let document = SecurityEventDocument::from(event);
        self.client
            .create_document(
                SECURITY_EVENTS_COLLECTION,
                &event.id.to_string(),
                &document,
            )
            .await
    }

    async fn list(&self, filter: &EventFilter) -> Result<EventPage, StoreError> {
        let queries = Self::build_queries(filter);
        let page = self
            .client
            .list_documents::<StoredSecurityEvent>(SECURITY_EVENTS_COLLECTION, &queries)
            .await?;

        let events = page
            .documents
            .into_iter()
            .map(StoredSecurityEvent::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(EventPage {
            events,
            total: page.total,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono::Utc;
    use domain::models::{SecurityEventType, Severity};

    #[test]
    fn test_build_queries_default_filter() {
        let queries = DocumentEventStore::build_queries(&EventFilter::default());
        assert_eq!(queries, vec![r#"orderDesc("timestamp")"#.to_string()]);
    }

    #[test]
    fn test_build_queries_full_filter() {
        let filter = EventFilter {
            camera_name: Some("camera-1".to_string()),
            severity: Some(Severity::High),
            event_type: Some(SecurityEventType::Loitering),
            since: Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap()),
            limit: 25,
        };

        let queries = DocumentEventStore::build_queries(&filter);
        assert_eq!(
            queries,
            vec![
                r#"equal("cameraName", ["camera-1"])"#.to_string(),
                r#"equal("severity", ["high"])"#.to_string(),
                r#"equal("type", ["loitering"])"#.to_string(),
                r#"greaterThanEqual("timestamp", ["2024-03-01T00:00:00+00:00"])"#.to_string(),
                r#"orderDesc("timestamp")"#.to_string(),
                "limit(25)".to_string(),
            ]
        );
    }
}
