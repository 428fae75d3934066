//! Behaviour coverage for the catalogue and administration services.

use chrono::{NaiveDate, NaiveTime};
use rstest::rstest;

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{MockEventRepository, MockRegistrationRepository};

fn sample_event(event_id: Uuid) -> Event {
    Event::new(EventDraft {
        id: event_id,
        title: "Tech Talk".to_owned(),
        description: "An evening of lightning talks.".to_owned(),
        event_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
        event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
        venue: "Main Auditorium".to_owned(),
        capacity: 120,
    })
    .expect("valid event")
}

fn submission() -> EventSubmission {
    EventSubmission {
        title: "Tech Talk".to_owned(),
        description: "An evening of lightning talks.".to_owned(),
        event_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
        event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
        venue: "Main Auditorium".to_owned(),
        capacity: 120,
    }
}

fn catalogue(events: MockEventRepository) -> EventCatalogueService<MockEventRepository> {
    EventCatalogueService::new(Arc::new(events))
}

fn admin(
    events: MockEventRepository,
    registrations: MockRegistrationRepository,
) -> EventAdminService<MockEventRepository, MockRegistrationRepository> {
    EventAdminService::new(Arc::new(events), Arc::new(registrations))
}

#[tokio::test]
async fn upcoming_listing_is_date_scoped_and_search_trimmed() {
    let mut events = MockEventRepository::new();
    events
        .expect_list()
        .withf(|filter| {
            matches!(filter.scope, EventScope::UpcomingOnOrAfter(_))
                && filter.search.as_deref() == Some("tech")
        })
        .once()
        .returning(|_| Ok(Vec::new()));

    let listed = catalogue(events)
        .list_events(EventListQuery {
            filter: EventListFilter::Upcoming,
            search: Some("  tech ".to_owned()),
        })
        .await
        .expect("listing succeeds");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn all_listing_drops_the_date_scope_and_blank_search() {
    let mut events = MockEventRepository::new();
    events
        .expect_list()
        .withf(|filter| filter.scope == EventScope::All && filter.search.is_none())
        .once()
        .returning(|_| Ok(Vec::new()));

    let _ = catalogue(events)
        .list_events(EventListQuery {
            filter: EventListFilter::All,
            search: Some("   ".to_owned()),
        })
        .await
        .expect("listing succeeds");
}

#[tokio::test]
async fn get_event_returns_the_summary() {
    let event_id = Uuid::new_v4();
    let mut events = MockEventRepository::new();
    events
        .expect_find_by_id()
        .withf(move |id| *id == event_id)
        .returning(move |id| Ok(Some(EventSummary::new(sample_event(id), 7))));

    let summary = catalogue(events)
        .get_event(event_id)
        .await
        .expect("lookup succeeds");
    assert_eq!(summary.registered_count(), 7);
    assert_eq!(summary.seats_left(), 113);
}

#[tokio::test]
async fn get_unknown_event_is_not_found() {
    let mut events = MockEventRepository::new();
    events.expect_find_by_id().returning(|_| Ok(None));

    let error = catalogue(events)
        .get_event(Uuid::new_v4())
        .await
        .expect_err("lookup fails");
    assert_eq!(error.code, ErrorCode::NotFound);
}

#[rstest]
#[case(
    EventRepositoryError::connection("refused"),
    ErrorCode::ServiceUnavailable
)]
#[case(EventRepositoryError::query("broken"), ErrorCode::InternalError)]
#[tokio::test]
async fn repository_faults_surface_as_domain_errors(
    #[case] failure: EventRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut events = MockEventRepository::new();
    let returned = failure.clone();
    events
        .expect_list()
        .returning(move |_| Err(returned.clone()));

    let error = catalogue(events)
        .list_events(EventListQuery::default())
        .await
        .expect_err("fault surfaces");
    assert_eq!(error.code, expected);
}

#[tokio::test]
async fn create_event_persists_a_validated_listing() {
    let mut events = MockEventRepository::new();
    events
        .expect_create()
        .withf(|event| event.title() == "Tech Talk" && event.capacity() == 120)
        .once()
        .returning(|_| Ok(()));

    let event_id = admin(events, MockRegistrationRepository::new())
        .create_event(submission())
        .await
        .expect("creation succeeds");
    assert!(!event_id.is_nil());
}

#[tokio::test]
async fn create_event_rejects_invalid_fields_before_the_store() {
    let mut events = MockEventRepository::new();
    events.expect_create().never();

    let mut input = submission();
    input.capacity = 0;

    let error = admin(events, MockRegistrationRepository::new())
        .create_event(input)
        .await
        .expect_err("validation fails");
    assert_eq!(error.code, ErrorCode::InvalidRequest);
    assert_eq!(
        error
            .details
            .as_ref()
            .and_then(|details| details.get("field"))
            .and_then(serde_json::Value::as_str),
        Some("capacity")
    );
}

#[tokio::test]
async fn update_event_replaces_existing_listings() {
    let event_id = Uuid::new_v4();
    let mut events = MockEventRepository::new();
    events
        .expect_update()
        .withf(move |event| event.id() == event_id)
        .once()
        .returning(|_| Ok(true));

    admin(events, MockRegistrationRepository::new())
        .update_event(event_id, submission())
        .await
        .expect("update succeeds");
}

#[tokio::test]
async fn update_unknown_event_is_not_found() {
    let mut events = MockEventRepository::new();
    events.expect_update().returning(|_| Ok(false));

    let error = admin(events, MockRegistrationRepository::new())
        .update_event(Uuid::new_v4(), submission())
        .await
        .expect_err("update fails");
    assert_eq!(error.code, ErrorCode::NotFound);
}

#[rstest]
#[case(true)]
#[case(false)]
#[tokio::test]
async fn delete_event_reports_presence(#[case] present: bool) {
    let mut events = MockEventRepository::new();
    events.expect_delete().returning(move |_| Ok(present));

    let result = admin(events, MockRegistrationRepository::new())
        .delete_event(Uuid::new_v4())
        .await;
    if present {
        result.expect("delete succeeds");
    } else {
        let error = result.expect_err("delete fails");
        assert_eq!(error.code, ErrorCode::NotFound);
    }
}

#[tokio::test]
async fn listing_registrations_requires_the_event_to_exist() {
    let mut events = MockEventRepository::new();
    events.expect_find_by_id().returning(|_| Ok(None));
    let mut registrations = MockRegistrationRepository::new();
    registrations.expect_list_for_event().never();

    let error = admin(events, registrations)
        .list_registrations(Uuid::new_v4())
        .await
        .expect_err("listing fails");
    assert_eq!(error.code, ErrorCode::NotFound);
}

#[tokio::test]
async fn listing_registrations_reads_from_the_repository() {
    let event_id = Uuid::new_v4();
    let mut events = MockEventRepository::new();
    events
        .expect_find_by_id()
        .returning(move |id| Ok(Some(EventSummary::new(sample_event(id), 0))));
    let mut registrations = MockRegistrationRepository::new();
    registrations
        .expect_list_for_event()
        .withf(move |id| *id == event_id)
        .once()
        .returning(|_| Ok(Vec::new()));

    let listed = admin(events, registrations)
        .list_registrations(event_id)
        .await
        .expect("listing succeeds");
    assert!(listed.is_empty());
}
