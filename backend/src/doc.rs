//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: every HTTP endpoint from the inbound layer, the
//! response body schemas, and the session cookie security scheme. The
//! generated specification backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::admin_events::{EventCreatedBody, EventPayloadBody, RegistrationBody};
use crate::inbound::http::events::EventSummaryBody;
use crate::inbound::http::registrations::{RegisterAttendeeBody, RegistrationAcceptedBody};
use crate::inbound::http::users::{
    AccountCreatedBody, HistoryEntryBody, LoginRequest, SignupRequest,
};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Eventify backend API",
        description = "HTTP interface for browsing events, registering attendance, and administering event listings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::sign_up,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::profile_registrations,
        crate::inbound::http::events::list_events,
        crate::inbound::http::events::get_event,
        crate::inbound::http::registrations::register_attendee,
        crate::inbound::http::admin_events::create_event,
        crate::inbound::http::admin_events::update_event,
        crate::inbound::http::admin_events::delete_event,
        crate::inbound::http::admin_events::list_event_registrations,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        EventSummaryBody,
        RegisterAttendeeBody,
        RegistrationAcceptedBody,
        EventPayloadBody,
        EventCreatedBody,
        RegistrationBody,
        SignupRequest,
        AccountCreatedBody,
        LoginRequest,
        HistoryEntryBody,
    )),
    tags(
        (name = "auth", description = "Account creation and sessions"),
        (name = "events", description = "Event browsing"),
        (name = "registrations", description = "Attendance registration"),
        (name = "admin", description = "Event administration"),
        (name = "profile", description = "The attendee's own data"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
