//! Driving port for browsing the event catalogue.
//!
//! Inbound adapters call this port to list and inspect events without
//! knowing the backing store. Handler tests substitute the fixture.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, EventSummary};

/// Date filter options exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventListFilter {
    /// Events dated today or later. The default view.
    #[default]
    Upcoming,
    /// Every event, past ones included.
    All,
}

/// Catalogue listing request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventListQuery {
    /// Date filter to apply.
    pub filter: EventListFilter,
    /// Optional title search term; blank terms are ignored.
    pub search: Option<String>,
}

/// Domain use-case port for event browsing.
#[async_trait]
pub trait EventCatalogue: Send + Sync {
    /// List events with their attendance counts, earliest date first.
    async fn list_events(&self, query: EventListQuery) -> Result<Vec<EventSummary>, Error>;

    /// Fetch one event with its attendance count.
    async fn get_event(&self, event_id: Uuid) -> Result<EventSummary, Error>;
}

/// Fixture implementation for tests that do not exercise the catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventCatalogue;

#[async_trait]
impl EventCatalogue for FixtureEventCatalogue {
    async fn list_events(&self, _query: EventListQuery) -> Result<Vec<EventSummary>, Error> {
        Ok(Vec::new())
    }

    async fn get_event(&self, event_id: Uuid) -> Result<EventSummary, Error> {
        Err(Error::not_found(format!("event {event_id} not found")))
    }
}
