//! Event store capability, the persistence seam for security events.

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::models::event::{EventFilter, EventPage, SecurityEvent};

/// Errors surfaced by an event store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store.
    #[error("document store unavailable: {0}")]
    Unavailable(String),
    /// The store answered with an error status.
    #[error("document store rejected request ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// A document could not be encoded or decoded.
    #[error("document encoding failed: {0}")]
    Encoding(String),
}

/// Event store trait over the external `security_events` collection.
#[async_trait::async_trait]
pub trait EventStore: Send + Sync {
    /// Persists one security event.
    async fn create(&self, event: &SecurityEvent) -> Result<(), StoreError>;

    /// Lists persisted events matching the filter, newest first, together
    /// with the total match count.
    async fn list(&self, filter: &EventFilter) -> Result<EventPage, StoreError>;

    /// Cheap connectivity check for readiness probes.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// In-memory event store for development and testing.
#[derive(Debug, Default)]
pub struct MemoryEventStore {
    events: Mutex<Vec<SecurityEvent>>,
    /// Number of writes accepted before simulated failures start.
    fail_after: Option<usize>,
}

impl MemoryEventStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects every write.
    pub fn failing() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_after: Some(0),
        }
    }

    /// Create a store that accepts `n` writes and rejects the rest.
    pub fn failing_after(n: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_after: Some(n),
        }
    }

    /// Snapshot of everything persisted so far.
    pub fn events(&self) -> Vec<SecurityEvent> {
        self.lock_events().clone()
    }

    fn lock_events(&self) -> MutexGuard<'_, Vec<SecurityEvent>> {
        // A panic while holding the lock only happens in tests; keep the data.
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait::async_trait]
impl EventStore for MemoryEventStore {
    async fn create(&self, event: &SecurityEvent) -> Result<(), StoreError> {
        let mut events = self.lock_events();

        if let Some(allowed) = self.fail_after {
            if events.len() >= allowed {
                return Err(StoreError::Unavailable(
                    "simulated write failure".to_string(),
                ));
            }
        }

        events.push(event.clone());
        Ok(())
    }

    async fn list(&self, filter: &EventFilter) -> Result<EventPage, StoreError> {
        let events = self.lock_events();

        let mut matched: Vec<SecurityEvent> = events
            .iter()
            .filter(|e| {
                filter
                    .camera_name
                    .as_ref()
                    .map_or(true, |c| &e.camera_name == c)
                    && filter.severity.map_or(true, |s| e.severity == s)
                    && filter.event_type.map_or(true, |t| e.event_type == t)
                    && filter.since.map_or(true, |s| e.timestamp >= s)
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total = matched.len() as u64;
        if filter.limit > 0 {
            matched.truncate(filter.limit as usize);
        }

        Ok(EventPage {
            events: matched,
            total,
        })
    }

    async fn ping(&self) -> Result<(), StoreError> {
        if self.fail_after == Some(0) {
            return Err(StoreError::Unavailable(
                "simulated store outage".to_string(),
            ));
        }
        Ok(())
    }
}
