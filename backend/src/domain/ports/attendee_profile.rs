//! Driving port for an attendee's own registration history.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AttendeeHistoryEntry, Error};

/// Domain use-case port for profile reads.
#[async_trait]
pub trait AttendeeProfile: Send + Sync {
    /// Registrations made with the account's email, newest first.
    async fn registration_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AttendeeHistoryEntry>, Error>;
}

/// Fixture implementation for tests that do not exercise profiles.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureAttendeeProfile;

#[async_trait]
impl AttendeeProfile for FixtureAttendeeProfile {
    async fn registration_history(
        &self,
        _user_id: Uuid,
    ) -> Result<Vec<AttendeeHistoryEntry>, Error> {
        Ok(Vec::new())
    }
}
