//! PostgreSQL-backed `EventRepository` implementation using Diesel ORM.
//!
//! Listing reads take two queries (events, then grouped registration
//! counts) and merge them in memory; the derived seats-left figure is
//! computed by the domain from the merged count.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::count_star;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{EventFilter, EventRepository, EventRepositoryError, EventScope};
use crate::domain::{Event, EventDraft, EventSummary};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EventChangeset, EventRow, NewEventRow};
use super::pool::{DbPool, PoolError};
use super::schema::{events, registrations};

/// Diesel-backed implementation of the event repository port.
#[derive(Clone)]
pub struct DieselEventRepository {
    pool: DbPool,
}

impl DieselEventRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> EventRepositoryError {
    map_basic_pool_error(error, EventRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> EventRepositoryError {
    map_basic_diesel_error(
        error,
        EventRepositoryError::query,
        EventRepositoryError::connection,
    )
}

/// Convert a database row and its observed registration count into a
/// validated domain summary.
fn row_to_summary(row: EventRow, registered: i64) -> Result<EventSummary, EventRepositoryError> {
    let EventRow {
        id,
        title,
        description,
        event_date,
        event_time,
        venue,
        capacity,
        created_at: _,
        updated_at: _,
    } = row;

    let capacity = u32::try_from(capacity)
        .map_err(|_| EventRepositoryError::query("negative capacity in events row"))?;
    let event = Event::new(EventDraft {
        id,
        title,
        description,
        event_date,
        event_time,
        venue,
        capacity,
    })
    .map_err(|err| EventRepositoryError::query(err.to_string()))?;

    let registered = u32::try_from(registered).unwrap_or(u32::MAX);
    Ok(EventSummary::new(event, registered))
}

fn storage_capacity(event: &Event) -> Result<i32, EventRepositoryError> {
    i32::try_from(event.capacity())
        .map_err(|_| EventRepositoryError::query("capacity exceeds storage range"))
}

#[async_trait]
impl EventRepository for DieselEventRepository {
    async fn list(&self, filter: &EventFilter) -> Result<Vec<EventSummary>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = events::table
            .select(EventRow::as_select())
            .order(events::event_date.asc())
            .into_boxed();
        if let EventScope::UpcomingOnOrAfter(date) = filter.scope {
            query = query.filter(events::event_date.ge(date));
        }
        if let Some(term) = &filter.search {
            query = query.filter(events::title.ilike(format!("%{term}%")));
        }

        let rows: Vec<EventRow> = query.load(&mut conn).await.map_err(map_diesel_error)?;

        let counts: HashMap<Uuid, i64> = registrations::table
            .group_by(registrations::event_id)
            .select((registrations::event_id, count_star()))
            .load::<(Uuid, i64)>(&mut conn)
            .await
            .map_err(map_diesel_error)?
            .into_iter()
            .collect();

        rows.into_iter()
            .map(|row| {
                let registered = counts.get(&row.id).copied().unwrap_or(0);
                row_to_summary(row, registered)
            })
            .collect()
    }

    async fn find_by_id(
        &self,
        event_id: Uuid,
    ) -> Result<Option<EventSummary>, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = events::table
            .find(event_id)
            .select(EventRow::as_select())
            .first::<EventRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        let Some(row) = row else {
            return Ok(None);
        };

        let registered: i64 = registrations::table
            .filter(registrations::event_id.eq(event_id))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_summary(row, registered).map(Some)
    }

    async fn create(&self, event: &Event) -> Result<(), EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewEventRow {
            id: event.id(),
            title: event.title(),
            description: event.description(),
            event_date: event.event_date(),
            event_time: event.event_time(),
            venue: event.venue(),
            capacity: storage_capacity(event)?,
        };

        diesel::insert_into(events::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn update(&self, event: &Event) -> Result<bool, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changeset = EventChangeset {
            title: event.title(),
            description: event.description(),
            event_date: event.event_date(),
            event_time: event.event_time(),
            venue: event.venue(),
            capacity: storage_capacity(event)?,
            updated_at: chrono::Utc::now(),
        };

        let affected = diesel::update(events::table.find(event.id()))
            .set(&changeset)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }

    async fn delete(&self, event_id: Uuid) -> Result<bool, EventRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Registrations go with the event via the FK cascade.
        let affected = diesel::delete(events::table.find(event_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::{NaiveDate, NaiveTime, Utc};
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> EventRow {
        EventRow {
            id: Uuid::new_v4(),
            title: "Tech Talk".to_owned(),
            description: "Lightning talks.".to_owned(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
            event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
            venue: "Main Auditorium".to_owned(),
            capacity: 100,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, EventRepositoryError::Connection { .. }));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(diesel::result::Error::NotFound);

        assert!(matches!(repo_err, EventRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_derives_counts(valid_row: EventRow) {
        let summary = row_to_summary(valid_row, 40).expect("valid row converts");
        assert_eq!(summary.registered_count(), 40);
        assert_eq!(summary.seats_left(), 60);
    }

    #[rstest]
    fn row_conversion_rejects_negative_capacity(mut valid_row: EventRow) {
        valid_row.capacity = -1;

        let error = row_to_summary(valid_row, 0).expect_err("negative capacity fails");
        assert!(matches!(error, EventRepositoryError::Query { .. }));
    }

    #[rstest]
    fn row_conversion_rejects_blank_title(mut valid_row: EventRow) {
        valid_row.title = "   ".to_owned();

        let error = row_to_summary(valid_row, 0).expect_err("blank title fails");
        assert!(error.to_string().contains("title"));
    }
}
