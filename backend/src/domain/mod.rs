//! Domain entities, services, and ports.
//!
//! Purpose: define the strongly typed core of the application (events,
//! registrations, accounts) together with the services that enforce the
//! admission invariant. Types are immutable once constructed and document
//! their invariants in Rustdoc. Transport and persistence concerns live in
//! the inbound and outbound adapters.

pub mod auth;
pub mod error;
pub mod event;
pub mod event_service;
pub mod ports;
pub mod profile_service;
pub mod registration;
pub mod registration_service;

pub use self::auth::{
    LoginCredentials, LoginValidationError, Role, RoleParseError, SessionIdentity, SignupDetails,
    SignupValidationError, UserRecord,
};
pub use self::error::{Error, ErrorCode};
pub use self::event::{Event, EventDraft, EventSummary, EventValidationError};
pub use self::event_service::{EventAdminService, EventCatalogueService};
pub use self::profile_service::ProfileService;
pub use self::registration::{
    AdmissionOutcome, AttendeeDetails, AttendeeField, AttendeeHistoryEntry, AttendeeSubmission,
    AttendeeValidationError, Registration,
};
pub use self::registration_service::RegistrationService;
