//! Event catalogue and administration services.
//!
//! These services implement the event driving ports on top of the event and
//! registration repositories, mapping repository faults and validation
//! failures to domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use uuid::Uuid;

use crate::domain::ports::{
    EventAdmin, EventCatalogue, EventFilter, EventListFilter, EventListQuery, EventRepository,
    EventRepositoryError, EventScope, EventSubmission, RegistrationRepository,
    RegistrationRepositoryError,
};
use crate::domain::{Error, Event, EventDraft, EventSummary, Registration};

fn map_event_repository_error(error: EventRepositoryError) -> Error {
    match error {
        EventRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("event repository unavailable: {message}"))
        }
        EventRepositoryError::Query { message } => {
            Error::internal(format!("event repository error: {message}"))
        }
    }
}

fn map_registration_repository_error(error: RegistrationRepositoryError) -> Error {
    match error {
        RegistrationRepositoryError::Connection { message } => Error::service_unavailable(
            format!("registration repository unavailable: {message}"),
        ),
        RegistrationRepositoryError::Query { message } => {
            Error::internal(format!("registration repository error: {message}"))
        }
    }
}

fn repository_filter(query: EventListQuery) -> EventFilter {
    let EventListQuery { filter, search } = query;
    let scope = match filter {
        EventListFilter::Upcoming => EventScope::UpcomingOnOrAfter(Utc::now().date_naive()),
        EventListFilter::All => EventScope::All,
    };
    let search = search
        .map(|term| term.trim().to_owned())
        .filter(|term| !term.is_empty());
    EventFilter { scope, search }
}

fn validated_event(event_id: Uuid, submission: EventSubmission) -> Result<Event, Error> {
    let EventSubmission {
        title,
        description,
        event_date,
        event_time,
        venue,
        capacity,
    } = submission;

    Event::new(EventDraft {
        id: event_id,
        title,
        description,
        event_date,
        event_time,
        venue,
        capacity,
    })
    .map_err(|invalid| {
        Error::invalid_request(invalid.to_string())
            .with_details(json!({ "field": invalid.field(), "code": "invalid_field" }))
    })
}

/// Catalogue service implementing the browsing driving port.
#[derive(Clone)]
pub struct EventCatalogueService<R> {
    events: Arc<R>,
}

impl<R> EventCatalogueService<R> {
    /// Create a new service with the event repository.
    pub fn new(events: Arc<R>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl<R> EventCatalogue for EventCatalogueService<R>
where
    R: EventRepository,
{
    async fn list_events(&self, query: EventListQuery) -> Result<Vec<EventSummary>, Error> {
        self.events
            .list(&repository_filter(query))
            .await
            .map_err(map_event_repository_error)
    }

    async fn get_event(&self, event_id: Uuid) -> Result<EventSummary, Error> {
        self.events
            .find_by_id(event_id)
            .await
            .map_err(map_event_repository_error)?
            .ok_or_else(|| Error::not_found(format!("event {event_id} not found")))
    }
}

/// Administration service implementing the listing-management driving port.
#[derive(Clone)]
pub struct EventAdminService<E, R> {
    events: Arc<E>,
    registrations: Arc<R>,
}

impl<E, R> EventAdminService<E, R> {
    /// Create a new service with the event and registration repositories.
    pub fn new(events: Arc<E>, registrations: Arc<R>) -> Self {
        Self {
            events,
            registrations,
        }
    }
}

#[async_trait]
impl<E, R> EventAdmin for EventAdminService<E, R>
where
    E: EventRepository,
    R: RegistrationRepository,
{
    async fn create_event(&self, submission: EventSubmission) -> Result<Uuid, Error> {
        let event = validated_event(Uuid::new_v4(), submission)?;
        self.events
            .create(&event)
            .await
            .map_err(map_event_repository_error)?;
        tracing::info!(event_id = %event.id(), title = event.title(), "event created");
        Ok(event.id())
    }

    async fn update_event(
        &self,
        event_id: Uuid,
        submission: EventSubmission,
    ) -> Result<(), Error> {
        let event = validated_event(event_id, submission)?;
        let updated = self
            .events
            .update(&event)
            .await
            .map_err(map_event_repository_error)?;
        if !updated {
            return Err(Error::not_found(format!("event {event_id} not found")));
        }
        Ok(())
    }

    async fn delete_event(&self, event_id: Uuid) -> Result<(), Error> {
        let deleted = self
            .events
            .delete(event_id)
            .await
            .map_err(map_event_repository_error)?;
        if !deleted {
            return Err(Error::not_found(format!("event {event_id} not found")));
        }
        tracing::info!(%event_id, "event deleted");
        Ok(())
    }

    async fn list_registrations(&self, event_id: Uuid) -> Result<Vec<Registration>, Error> {
        self.events
            .find_by_id(event_id)
            .await
            .map_err(map_event_repository_error)?
            .ok_or_else(|| Error::not_found(format!("event {event_id} not found")))?;

        self.registrations
            .list_for_event(event_id)
            .await
            .map_err(map_registration_repository_error)
    }
}

#[cfg(test)]
#[path = "event_service_tests.rs"]
mod tests;
