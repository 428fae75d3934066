//! Port for event persistence and attendance-counted reads.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::{Event, EventSummary};

/// Errors raised by event repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EventRepositoryError {
    /// Repository connection could not be established.
    #[error("event repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("event repository query failed: {message}")]
    Query { message: String },
}

impl EventRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Date scope applied to event listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventScope {
    /// Only events on or after the given date.
    UpcomingOnOrAfter(NaiveDate),
    /// Every event regardless of date.
    All,
}

/// Listing filter: date scope plus optional title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFilter {
    /// Date scope to apply.
    pub scope: EventScope,
    /// Case-insensitive title substring to match, if any.
    pub search: Option<String>,
}

/// Port for reading and mutating events.
///
/// Reads return [`EventSummary`] so the registration count is taken in the
/// same query pass as the event itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// List events matching the filter, ordered by event date ascending.
    async fn list(&self, filter: &EventFilter) -> Result<Vec<EventSummary>, EventRepositoryError>;

    /// Find one event by id, with its registration count.
    async fn find_by_id(
        &self,
        event_id: Uuid,
    ) -> Result<Option<EventSummary>, EventRepositoryError>;

    /// Persist a new event.
    async fn create(&self, event: &Event) -> Result<(), EventRepositoryError>;

    /// Replace an existing event's fields. Returns `false` when absent.
    async fn update(&self, event: &Event) -> Result<bool, EventRepositoryError>;

    /// Delete an event. Returns `false` when absent.
    ///
    /// Registrations belonging to the event are removed with it.
    async fn delete(&self, event_id: Uuid) -> Result<bool, EventRepositoryError>;
}
