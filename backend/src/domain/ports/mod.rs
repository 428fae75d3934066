//! Ports connecting the domain to its adapters.
//!
//! Driving ports (`EventCatalogue`, `EventAdmin`, `RegistrationCommand`,
//! `AttendeeProfile`, `IdentityService`) are what inbound adapters call.
//! Driven ports (`EventRepository`, `RegistrationRepository`,
//! `UserRepository`) are what the domain services call and the persistence
//! adapters implement. Fixture implementations keep handler tests free of
//! I/O.

mod attendee_profile;
mod event_admin;
mod event_catalogue;
mod event_repository;
mod identity_service;
mod registration_command;
mod registration_repository;
mod user_repository;

pub use attendee_profile::{AttendeeProfile, FixtureAttendeeProfile};
pub use event_admin::{EventAdmin, EventSubmission, FixtureEventAdmin};
pub use event_catalogue::{EventCatalogue, EventListFilter, EventListQuery, FixtureEventCatalogue};
pub use event_repository::{EventFilter, EventRepository, EventRepositoryError, EventScope};
pub use identity_service::{FixtureIdentityService, IdentityService};
pub use registration_command::{FixtureRegistrationCommand, RegistrationCommand};
pub use registration_repository::{
    AdmissionInsert, RegistrationRepository, RegistrationRepositoryError,
};
pub use user_repository::{NewUserOutcome, NewUserRecord, UserRepository, UserRepositoryError};

#[cfg(test)]
pub use event_repository::MockEventRepository;
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
