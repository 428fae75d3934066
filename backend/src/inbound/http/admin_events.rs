//! Event administration HTTP handlers.
//!
//! ```text
//! POST   /api/v1/admin/events
//! PUT    /api/v1/admin/events/{event_id}
//! DELETE /api/v1/admin/events/{event_id}
//! GET    /api/v1/admin/events/{event_id}/registrations
//! ```
//!
//! Every route requires an administrator session.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Registration;
use crate::domain::ports::EventSubmission;
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_date, parse_time, parse_uuid};

/// Request payload for creating or replacing an event listing.
///
/// Absent fields deserialise as empty values and fail validation the same
/// way blank ones do.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPayloadBody {
    pub title: String,
    pub description: String,
    #[schema(example = "2026-09-12")]
    pub event_date: String,
    #[schema(example = "18:30")]
    pub event_time: String,
    pub venue: String,
    pub capacity: u32,
}

/// Response payload for a created event.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventCreatedBody {
    #[schema(format = "uuid")]
    pub event_id: String,
}

/// One registration row in the administrator's listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub branch: String,
    pub year: String,
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Registration> for RegistrationBody {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id.to_string(),
            name: registration.attendee.name().to_owned(),
            email: registration.attendee.email().to_owned(),
            branch: registration.attendee.branch().to_owned(),
            year: registration.attendee.year().to_owned(),
            created_at: registration.created_at.to_rfc3339(),
        }
    }
}

fn parse_submission(body: EventPayloadBody) -> Result<EventSubmission, crate::domain::Error> {
    let EventPayloadBody {
        title,
        description,
        event_date,
        event_time,
        venue,
        capacity,
    } = body;

    Ok(EventSubmission {
        title,
        description,
        event_date: parse_date(&event_date, FieldName::new("eventDate"))?,
        event_time: parse_time(&event_time, FieldName::new("eventTime"))?,
        venue,
        capacity,
    })
}

/// Create a new event listing.
#[utoipa::path(
    post,
    path = "/api/v1/admin/events",
    request_body = EventPayloadBody,
    responses(
        (status = 201, description = "Event created", body = EventCreatedBody),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 403, description = "Forbidden", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "createEvent",
    security(("SessionCookie" = []))
)]
#[post("/admin/events")]
pub async fn create_event(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<EventPayloadBody>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;

    let submission = parse_submission(payload.into_inner())?;
    let event_id = state.admin.create_event(submission).await?;
    Ok(HttpResponse::Created().json(EventCreatedBody {
        event_id: event_id.to_string(),
    }))
}

/// Replace an event listing's fields.
#[utoipa::path(
    put,
    path = "/api/v1/admin/events/{event_id}",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = EventPayloadBody,
    responses(
        (status = 204, description = "Event updated"),
        (status = 400, description = "Invalid request", body = crate::domain::Error),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 403, description = "Forbidden", body = crate::domain::Error),
        (status = 404, description = "Event not found", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "updateEvent",
    security(("SessionCookie" = []))
)]
#[put("/admin/events/{event_id}")]
pub async fn update_event(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<EventPayloadBody>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;

    let event_id = parse_uuid(&path.into_inner(), FieldName::new("eventId"))?;
    let submission = parse_submission(payload.into_inner())?;
    state.admin.update_event(event_id, submission).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete an event listing and its registrations.
#[utoipa::path(
    delete,
    path = "/api/v1/admin/events/{event_id}",
    params(("event_id" = String, Path, description = "Event identifier")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 403, description = "Forbidden", body = crate::domain::Error),
        (status = 404, description = "Event not found", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "deleteEvent",
    security(("SessionCookie" = []))
)]
#[delete("/admin/events/{event_id}")]
pub async fn delete_event(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    session.require_admin()?;

    let event_id = parse_uuid(&path.into_inner(), FieldName::new("eventId"))?;
    state.admin.delete_event(event_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// List an event's registrations, newest first.
#[utoipa::path(
    get,
    path = "/api/v1/admin/events/{event_id}/registrations",
    params(("event_id" = String, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Registrations", body = [RegistrationBody]),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 403, description = "Forbidden", body = crate::domain::Error),
        (status = 404, description = "Event not found", body = crate::domain::Error)
    ),
    tags = ["admin"],
    operation_id = "listEventRegistrations",
    security(("SessionCookie" = []))
)]
#[get("/admin/events/{event_id}/registrations")]
pub async fn list_event_registrations(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<RegistrationBody>>> {
    session.require_admin()?;

    let event_id = parse_uuid(&path.into_inner(), FieldName::new("eventId"))?;
    let registrations = state.admin.list_registrations(event_id).await?;
    Ok(web::Json(
        registrations.into_iter().map(RegistrationBody::from).collect(),
    ))
}
