//! Port for registration persistence and the capacity-checked insert.
//!
//! The admission sequence (read capacity and count, check, insert) must
//! execute as one atomic unit serialised per event, so the port exposes it
//! as a single operation rather than separate reads and writes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AttendeeDetails, AttendeeHistoryEntry, Registration};

/// Errors raised by registration repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationRepositoryError {
    /// Repository connection could not be established.
    #[error("registration repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("registration repository query failed: {message}")]
    Query { message: String },
}

impl RegistrationRepositoryError {
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

/// Discriminated result of the atomic admission insert.
///
/// Every variant other than `Inserted` leaves the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionInsert {
    /// Exactly one registration row was committed.
    Inserted {
        registration_id: Uuid,
        /// Seats remaining after the insert, computed inside the same
        /// transaction.
        seats_left: u32,
    },
    /// The registration count already equals the capacity.
    CapacityExhausted,
    /// A registration with this `(event_id, email)` pair already exists,
    /// including one committed concurrently.
    DuplicateEmail,
    /// The event does not exist.
    EventMissing,
}

/// Port for writing registrations and reading them back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Atomically admit an attendee to an event.
    ///
    /// Implementations must serialise the capacity check against concurrent
    /// inserts for the same event: two attempts racing for one remaining
    /// seat resolve to one `Inserted` and one `CapacityExhausted`, never
    /// two inserts.
    async fn admit(
        &self,
        event_id: Uuid,
        attendee: &AttendeeDetails,
    ) -> Result<AdmissionInsert, RegistrationRepositoryError>;

    /// List registrations for an event, newest first.
    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<Registration>, RegistrationRepositoryError>;

    /// The registration history for an attendee email, newest first.
    async fn history_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<AttendeeHistoryEntry>, RegistrationRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_constructors_format_messages() {
        let connection = RegistrationRepositoryError::connection("refused");
        assert!(connection.to_string().contains("refused"));

        let query = RegistrationRepositoryError::query("bad sql");
        assert!(query.to_string().contains("bad sql"));
    }
}
