//! Driving port for administering event listings.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::domain::{Error, Registration};

/// Event fields submitted by an administrator. Validated by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSubmission {
    pub title: String,
    pub description: String,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub venue: String,
    pub capacity: u32,
}

/// Domain use-case port for event administration.
///
/// Role enforcement happens at the HTTP edge; implementations assume the
/// caller is an administrator.
#[async_trait]
pub trait EventAdmin: Send + Sync {
    /// Create a new event listing, returning its id.
    async fn create_event(&self, submission: EventSubmission) -> Result<Uuid, Error>;

    /// Replace an event's fields. Unknown events are a not-found error.
    ///
    /// Lowering the capacity below the current registration count is
    /// allowed; it only gates future admissions.
    async fn update_event(&self, event_id: Uuid, submission: EventSubmission)
    -> Result<(), Error>;

    /// Delete an event and its registrations.
    async fn delete_event(&self, event_id: Uuid) -> Result<(), Error>;

    /// List an event's registrations, newest first.
    async fn list_registrations(&self, event_id: Uuid) -> Result<Vec<Registration>, Error>;
}

/// Fixture implementation for tests that do not exercise administration.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEventAdmin;

#[async_trait]
impl EventAdmin for FixtureEventAdmin {
    async fn create_event(&self, _submission: EventSubmission) -> Result<Uuid, Error> {
        Ok(Uuid::nil())
    }

    async fn update_event(
        &self,
        event_id: Uuid,
        _submission: EventSubmission,
    ) -> Result<(), Error> {
        Err(Error::not_found(format!("event {event_id} not found")))
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), Error> {
        Err(Error::not_found(format!("event {event_id} not found")))
    }

    async fn list_registrations(&self, _event_id: Uuid) -> Result<Vec<Registration>, Error> {
        Ok(Vec::new())
    }
}
