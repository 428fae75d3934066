//! Admission control for event registrations.
//!
//! This service owns the invariant that an event's registration count never
//! exceeds its capacity and that `(event_id, email)` is unique among
//! registrations. Input validation happens here, before the store is
//! touched; the capacity check and insert are delegated to the repository
//! as one atomic, per-event-serialised operation.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    AdmissionInsert, RegistrationCommand, RegistrationRepository, RegistrationRepositoryError,
};
use crate::domain::{AdmissionOutcome, AttendeeDetails, AttendeeSubmission, Error};

fn map_repository_error(error: RegistrationRepositoryError) -> Error {
    match error {
        RegistrationRepositoryError::Connection { message } => Error::service_unavailable(
            format!("registration repository unavailable: {message}"),
        ),
        RegistrationRepositoryError::Query { message } => {
            Error::internal(format!("registration repository error: {message}"))
        }
    }
}

/// Registration service implementing the admission command port.
#[derive(Clone)]
pub struct RegistrationService<R> {
    registrations: Arc<R>,
}

impl<R> RegistrationService<R> {
    /// Create a new service with the registration repository.
    pub fn new(registrations: Arc<R>) -> Self {
        Self { registrations }
    }
}

#[async_trait]
impl<R> RegistrationCommand for RegistrationService<R>
where
    R: RegistrationRepository,
{
    async fn attempt_registration(
        &self,
        event_id: Uuid,
        submission: AttendeeSubmission,
    ) -> Result<AdmissionOutcome, Error> {
        let attendee = match AttendeeDetails::from_submission(submission) {
            Ok(attendee) => attendee,
            Err(invalid) => {
                return Ok(AdmissionOutcome::RejectedInvalidInput {
                    field: invalid.field(),
                });
            }
        };

        let inserted = self
            .registrations
            .admit(event_id, &attendee)
            .await
            .map_err(map_repository_error)?;

        match inserted {
            AdmissionInsert::Inserted {
                registration_id,
                seats_left,
            } => {
                tracing::info!(%event_id, %registration_id, seats_left, "registration accepted");
                Ok(AdmissionOutcome::Accepted {
                    registration_id,
                    seats_left,
                })
            }
            AdmissionInsert::CapacityExhausted => Ok(AdmissionOutcome::RejectedFull),
            AdmissionInsert::DuplicateEmail => Ok(AdmissionOutcome::RejectedDuplicate),
            AdmissionInsert::EventMissing => {
                Err(Error::not_found(format!("event {event_id} not found")))
            }
        }
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
