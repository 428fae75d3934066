//! Registrations and the admission decision vocabulary.
//!
//! A registration records one attendee for one event. For a given
//! `(event_id, email)` pair there are exactly two states, unregistered and
//! registered, with a single one-way transition triggered by an accepted
//! admission. Email matching is exact; no case folding is applied.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

/// The attendee fields collected by the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendeeField {
    Name,
    Email,
    Branch,
    Year,
}

impl AttendeeField {
    /// Field name as it appears in request payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Branch => "branch",
            Self::Year => "year",
        }
    }
}

/// Validation failures raised when constructing [`AttendeeDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{} must not be empty", field.as_str())]
pub struct AttendeeValidationError {
    field: AttendeeField,
}

impl AttendeeValidationError {
    /// The field that failed validation.
    pub const fn field(self) -> AttendeeField {
        self.field
    }
}

/// Raw attendee fields as submitted, prior to validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeSubmission {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
}

/// Validated attendee details. All fields are non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeDetails {
    name: String,
    email: String,
    branch: String,
    year: String,
}

impl AttendeeDetails {
    /// Validate a submission, trimming every field.
    ///
    /// The first empty field is reported; the caller surfaces it as an
    /// invalid-input rejection rather than a fault.
    pub fn from_submission(
        submission: AttendeeSubmission,
    ) -> Result<Self, AttendeeValidationError> {
        let AttendeeSubmission {
            name,
            email,
            branch,
            year,
        } = submission;

        let name = require(name, AttendeeField::Name)?;
        let email = require(email, AttendeeField::Email)?;
        let branch = require(branch, AttendeeField::Branch)?;
        let year = require(year, AttendeeField::Year)?;

        Ok(Self {
            name,
            email,
            branch,
            year,
        })
    }

    /// Attendee display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email; also the duplicate-detection key for an event.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Branch or department the attendee belongs to.
    pub fn branch(&self) -> &str {
        self.branch.as_str()
    }

    /// Year of study.
    pub fn year(&self) -> &str {
        self.year.as_str()
    }
}

fn require(value: String, field: AttendeeField) -> Result<String, AttendeeValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AttendeeValidationError { field });
    }
    Ok(trimmed.to_owned())
}

/// A persisted registration. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Stable registration identifier.
    pub id: Uuid,
    /// Event the registration belongs to.
    pub event_id: Uuid,
    /// Validated attendee details.
    pub attendee: AttendeeDetails,
    /// When the registration was recorded.
    pub created_at: DateTime<Utc>,
}

/// One row of an attendee's registration history, joined with event details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeHistoryEntry {
    /// When the registration was recorded.
    pub registered_at: DateTime<Utc>,
    /// Title of the registered event.
    pub event_title: String,
    /// Date of the registered event.
    pub event_date: NaiveDate,
    /// Start time of the registered event.
    pub event_time: NaiveTime,
    /// Venue of the registered event.
    pub venue: String,
}

/// Decision returned for every registration attempt.
///
/// Rejections are expected, user-facing outcomes, not faults; each kind
/// carries enough information for the caller to render a specific message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionOutcome {
    /// The registration was durably recorded.
    Accepted {
        /// Identifier of the new registration row.
        registration_id: Uuid,
        /// Seats remaining after the insert, recomputed in the same
        /// transaction.
        seats_left: u32,
    },
    /// The event has no seats left; nothing was written.
    RejectedFull,
    /// This email is already registered for the event; nothing was written.
    RejectedDuplicate,
    /// A required attendee field was empty; the store was not touched.
    RejectedInvalidInput {
        /// The first field that failed validation.
        field: AttendeeField,
    },
}
