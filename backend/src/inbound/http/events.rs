//! Event browsing HTTP handlers.
//!
//! ```text
//! GET /api/v1/events?filter=upcoming&q=tech
//! GET /api/v1/events/{event_id}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::EventSummary;
use crate::domain::ports::{EventListFilter, EventListQuery};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Query string accepted by the listing endpoint.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsParams {
    /// Title search term.
    pub q: Option<String>,
    /// Date filter: `upcoming` (default) or anything else for all events.
    pub filter: Option<String>,
}

/// One event in a listing or detail response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub title: String,
    pub description: String,
    #[schema(example = "2026-09-12")]
    pub event_date: String,
    #[schema(example = "18:30:00")]
    pub event_time: String,
    pub venue: String,
    pub capacity: u32,
    pub registered_count: u32,
    pub seats_left: u32,
}

impl From<EventSummary> for EventSummaryBody {
    fn from(summary: EventSummary) -> Self {
        let seats_left = summary.seats_left();
        let registered_count = summary.registered_count();
        let event = summary.event();
        Self {
            id: event.id().to_string(),
            title: event.title().to_owned(),
            description: event.description().to_owned(),
            event_date: event.event_date().to_string(),
            event_time: event.event_time().format("%H:%M:%S").to_string(),
            venue: event.venue().to_owned(),
            capacity: event.capacity(),
            registered_count,
            seats_left,
        }
    }
}

fn list_query(params: ListEventsParams) -> EventListQuery {
    // Any explicit filter other than `upcoming` widens the view to every
    // event.
    let filter = match params.filter.as_deref() {
        None | Some("upcoming") => EventListFilter::Upcoming,
        Some(_) => EventListFilter::All,
    };
    EventListQuery {
        filter,
        search: params.q,
    }
}

/// List events visible to the logged-in attendee.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    params(ListEventsParams),
    responses(
        (status = 200, description = "Events", body = [EventSummaryBody]),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 503, description = "Service unavailable", body = crate::domain::Error)
    ),
    tags = ["events"],
    operation_id = "listEvents",
    security(("SessionCookie" = []))
)]
#[get("/events")]
pub async fn list_events(
    state: web::Data<HttpState>,
    session: SessionContext,
    params: web::Query<ListEventsParams>,
) -> ApiResult<web::Json<Vec<EventSummaryBody>>> {
    session.require_user()?;

    let summaries = state
        .catalogue
        .list_events(list_query(params.into_inner()))
        .await?;
    Ok(web::Json(
        summaries.into_iter().map(EventSummaryBody::from).collect(),
    ))
}

/// Fetch one event with its attendance counts.
#[utoipa::path(
    get,
    path = "/api/v1/events/{event_id}",
    params(("event_id" = String, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "Event details", body = EventSummaryBody),
        (status = 401, description = "Unauthorised", body = crate::domain::Error),
        (status = 404, description = "Event not found", body = crate::domain::Error)
    ),
    tags = ["events"],
    operation_id = "getEvent",
    security(("SessionCookie" = []))
)]
#[get("/events/{event_id}")]
pub async fn get_event(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<EventSummaryBody>> {
    session.require_user()?;

    let event_id = parse_uuid(&path.into_inner(), FieldName::new("eventId"))?;
    let summary = state.catalogue.get_event(event_id).await?;
    Ok(web::Json(EventSummaryBody::from(summary)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::EventCatalogue;
    use crate::domain::{Error, Event, EventDraft, Role};
    use crate::inbound::http::test_utils;

    struct StubCatalogue {
        summaries: Vec<EventSummary>,
    }

    #[async_trait]
    impl EventCatalogue for StubCatalogue {
        async fn list_events(&self, _query: EventListQuery) -> Result<Vec<EventSummary>, Error> {
            Ok(self.summaries.clone())
        }

        async fn get_event(&self, event_id: Uuid) -> Result<EventSummary, Error> {
            self.summaries
                .iter()
                .find(|summary| summary.event().id() == event_id)
                .cloned()
                .ok_or_else(|| Error::not_found(format!("event {event_id} not found")))
        }
    }

    fn summary(event_id: Uuid, registered: u32) -> EventSummary {
        let event = Event::new(EventDraft {
            id: event_id,
            title: "Tech Talk".to_owned(),
            description: "Lightning talks.".to_owned(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
            event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
            venue: "Main Auditorium".to_owned(),
            capacity: 100,
        })
        .expect("valid event");
        EventSummary::new(event, registered)
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_utils::test_session_middleware())
            .route(
                "/seed-session/{role}",
                web::post().to(test_utils::seed_session),
            )
            .service(web::scope("/api/v1").service(list_events).service(get_event))
    }

    fn state_with(summaries: Vec<EventSummary>) -> HttpState {
        HttpState {
            catalogue: Arc::new(StubCatalogue { summaries }),
            ..HttpState::default()
        }
    }

    #[actix_web::test]
    async fn listing_requires_a_session() {
        let app = test::init_service(test_app(state_with(Vec::new()))).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/v1/events").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn listing_returns_summaries_with_derived_counts() {
        let event_id = Uuid::new_v4();
        let app = test::init_service(test_app(state_with(vec![summary(event_id, 40)]))).await;
        let cookie = test_utils::session_cookie(&app, Role::Attendee).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/events?filter=upcoming&q=tech")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Vec<EventSummaryBody> = test::read_body_json(res).await;
        assert_eq!(body.len(), 1);
        let first = body.first().expect("one summary");
        assert_eq!(first.id, event_id.to_string());
        assert_eq!(first.registered_count, 40);
        assert_eq!(first.seats_left, 60);
        assert_eq!(first.event_time, "18:30:00");
    }

    #[actix_web::test]
    async fn detail_returns_the_event() {
        let event_id = Uuid::new_v4();
        let app = test::init_service(test_app(state_with(vec![summary(event_id, 3)]))).await;
        let cookie = test_utils::session_cookie(&app, Role::Attendee).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/events/{event_id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: EventSummaryBody = test::read_body_json(res).await;
        assert_eq!(body.seats_left, 97);
    }

    #[actix_web::test]
    async fn unknown_event_is_not_found() {
        let app = test::init_service(test_app(state_with(Vec::new()))).await;
        let cookie = test_utils::session_cookie(&app, Role::Attendee).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/v1/events/{}", Uuid::new_v4()))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_event_id_is_invalid() {
        let app = test::init_service(test_app(state_with(Vec::new()))).await;
        let cookie = test_utils::session_cookie(&app, Role::Attendee).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/events/not-a-uuid")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }
}
