//! Driving port for registration attempts.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AdmissionOutcome, AttendeeSubmission, Error};

/// Domain use-case port for admission control.
#[async_trait]
pub trait RegistrationCommand: Send + Sync {
    /// Attempt to register an attendee for an event.
    ///
    /// Rejections (full, duplicate, invalid input) come back as
    /// [`AdmissionOutcome`] values. An unknown event is a not-found error,
    /// distinct from any rejection; storage faults surface as
    /// service-unavailable or internal errors.
    async fn attempt_registration(
        &self,
        event_id: Uuid,
        submission: AttendeeSubmission,
    ) -> Result<AdmissionOutcome, Error>;
}

/// Fixture implementation accepting every attempt with zero seats left.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrationCommand;

#[async_trait]
impl RegistrationCommand for FixtureRegistrationCommand {
    async fn attempt_registration(
        &self,
        _event_id: Uuid,
        _submission: AttendeeSubmission,
    ) -> Result<AdmissionOutcome, Error> {
        Ok(AdmissionOutcome::Accepted {
            registration_id: Uuid::nil(),
            seats_left: 0,
        })
    }
}
