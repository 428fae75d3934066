//! Registration HTTP handlers.
//!
//! ```text
//! POST /api/v1/events/{event_id}/registrations
//! ```
//!
//! Every admission outcome maps to a distinct status and machine code so
//! the client can render a specific message per kind.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{AdmissionOutcome, AttendeeSubmission, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for registering an attendee.
///
/// Absent fields deserialise as empty strings and fail validation the same
/// way blank ones do.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterAttendeeBody {
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
}

/// Response payload for an accepted registration.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationAcceptedBody {
    #[schema(format = "uuid")]
    pub registration_id: String,
    /// Seats remaining after this registration.
    pub seats_left: u32,
}

/// Register an attendee for an event.
#[utoipa::path(
    post,
    path = "/api/v1/events/{event_id}/registrations",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = RegisterAttendeeBody,
    responses(
        (status = 201, description = "Registration accepted", body = RegistrationAcceptedBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 404, description = "Event not found", body = crate::domain::Error),
        (status = 409, description = "Event full or email already registered", body = crate::domain::Error),
        (status = 503, description = "Service unavailable", body = crate::domain::Error)
    ),
    tags = ["registrations"],
    operation_id = "registerAttendee",
    security(("SessionCookie" = []))
)]
#[post("/events/{event_id}/registrations")]
pub async fn register_attendee(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<RegisterAttendeeBody>,
) -> ApiResult<HttpResponse> {
    session.require_user()?;

    let event_id = parse_uuid(&path.into_inner(), FieldName::new("eventId"))?;
    let RegisterAttendeeBody {
        name,
        email,
        branch,
        year,
    } = payload.into_inner();

    let outcome = state
        .registrations
        .attempt_registration(
            event_id,
            AttendeeSubmission {
                name,
                email,
                branch,
                year,
            },
        )
        .await?;

    match outcome {
        AdmissionOutcome::Accepted {
            registration_id,
            seats_left,
        } => Ok(HttpResponse::Created().json(RegistrationAcceptedBody {
            registration_id: registration_id.to_string(),
            seats_left,
        })),
        AdmissionOutcome::RejectedFull => Err(Error::conflict(
            "Event is full. Registration closed.",
        )
        .with_details(json!({ "code": "event_full" }))),
        AdmissionOutcome::RejectedDuplicate => Err(Error::conflict(
            "You have already registered with this email for this event.",
        )
        .with_details(json!({ "code": "duplicate_registration" }))),
        AdmissionOutcome::RejectedInvalidInput { field } => {
            Err(Error::invalid_request("All fields are required.").with_details(json!({
                "field": field.as_str(),
                "code": "missing_field",
            })))
        }
    }
}
