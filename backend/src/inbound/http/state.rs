//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AttendeeProfile, EventAdmin, EventCatalogue, FixtureAttendeeProfile, FixtureEventAdmin,
    FixtureEventCatalogue, FixtureIdentityService, FixtureRegistrationCommand, IdentityService,
    RegistrationCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Event browsing use-cases.
    pub catalogue: Arc<dyn EventCatalogue>,
    /// Event administration use-cases.
    pub admin: Arc<dyn EventAdmin>,
    /// Admission control.
    pub registrations: Arc<dyn RegistrationCommand>,
    /// Attendee profile reads.
    pub profile: Arc<dyn AttendeeProfile>,
    /// Account creation and login.
    pub identity: Arc<dyn IdentityService>,
}

impl Default for HttpState {
    /// State wired entirely with fixtures, for tests and database-less runs.
    fn default() -> Self {
        Self {
            catalogue: Arc::new(FixtureEventCatalogue),
            admin: Arc::new(FixtureEventAdmin),
            registrations: Arc::new(FixtureRegistrationCommand),
            profile: Arc::new(FixtureAttendeeProfile),
            identity: Arc::new(FixtureIdentityService),
        }
    }
}
