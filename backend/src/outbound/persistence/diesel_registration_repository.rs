//! PostgreSQL-backed `RegistrationRepository` implementation using Diesel ORM.
//!
//! The admission path is the one place this crate relies on database
//! concurrency semantics. The whole read-check-insert sequence runs in a
//! single transaction that first locks the event row with `FOR UPDATE`, so
//! concurrent attempts for the same event serialise and can never both
//! observe the last free seat. The `(event_id, email)` unique index backs
//! the duplicate check at the storage layer; a violation that still reaches
//! the insert rolls the transaction back and reports a duplicate.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    AdmissionInsert, RegistrationRepository, RegistrationRepositoryError,
};
use crate::domain::{AttendeeDetails, AttendeeHistoryEntry, AttendeeSubmission, Registration};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{EventRow, NewRegistrationRow, RegistrationRow};
use super::pool::{DbPool, PoolError};
use super::schema::{events, registrations};

/// Diesel-backed implementation of the registration repository port.
#[derive(Clone)]
pub struct DieselRegistrationRepository {
    pool: DbPool,
}

impl DieselRegistrationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RegistrationRepositoryError {
    map_basic_pool_error(error, RegistrationRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> RegistrationRepositoryError {
    map_basic_diesel_error(
        error,
        RegistrationRepositoryError::query,
        RegistrationRepositoryError::connection,
    )
}

/// Convert a database row into a validated domain registration.
fn row_to_registration(
    row: RegistrationRow,
) -> Result<Registration, RegistrationRepositoryError> {
    let RegistrationRow {
        id,
        event_id,
        name,
        email,
        branch,
        year,
        created_at,
    } = row;

    let attendee = AttendeeDetails::from_submission(AttendeeSubmission {
        name,
        email,
        branch,
        year,
    })
    .map_err(|err| RegistrationRepositoryError::query(err.to_string()))?;

    Ok(Registration {
        id,
        event_id,
        attendee,
        created_at,
    })
}

#[async_trait]
impl RegistrationRepository for DieselRegistrationRepository {
    async fn admit(
        &self,
        event_id: Uuid,
        attendee: &AttendeeDetails,
    ) -> Result<AdmissionInsert, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let result = conn
            .transaction::<AdmissionInsert, DieselError, _>(|conn| {
                async move {
                    // Lock the event row for the rest of the transaction.
                    // Every admission for this event queues behind the lock,
                    // so count and duplicate checks below are authoritative.
                    let event = events::table
                        .find(event_id)
                        .select(EventRow::as_select())
                        .for_update()
                        .first::<EventRow>(conn)
                        .await
                        .optional()?;
                    let Some(event) = event else {
                        return Ok(AdmissionInsert::EventMissing);
                    };

                    let registered: i64 = registrations::table
                        .filter(registrations::event_id.eq(event_id))
                        .count()
                        .get_result(conn)
                        .await?;
                    let capacity = i64::from(event.capacity);
                    if registered >= capacity {
                        return Ok(AdmissionInsert::CapacityExhausted);
                    }

                    let duplicate: bool = diesel::select(diesel::dsl::exists(
                        registrations::table
                            .filter(registrations::event_id.eq(event_id))
                            .filter(registrations::email.eq(attendee.email())),
                    ))
                    .get_result(conn)
                    .await?;
                    if duplicate {
                        return Ok(AdmissionInsert::DuplicateEmail);
                    }

                    let registration_id = Uuid::new_v4();
                    diesel::insert_into(registrations::table)
                        .values(NewRegistrationRow {
                            id: registration_id,
                            event_id,
                            name: attendee.name(),
                            email: attendee.email(),
                            branch: attendee.branch(),
                            year: attendee.year(),
                        })
                        .execute(conn)
                        .await?;

                    let seats_left = u32::try_from(capacity - registered - 1).unwrap_or(0);
                    Ok(AdmissionInsert::Inserted {
                        registration_id,
                        seats_left,
                    })
                }
                .scope_boxed()
            })
            .await;

        match result {
            Ok(outcome) => Ok(outcome),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info)) => {
                // The unique index is the backstop behind the row lock; the
                // transaction has already rolled back, nothing was written.
                debug!(
                    message = info.message(),
                    "unique constraint hit during admission"
                );
                Ok(AdmissionInsert::DuplicateEmail)
            }
            Err(error) => Err(map_diesel_error(error)),
        }
    }

    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<Registration>, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RegistrationRow> = registrations::table
            .filter(registrations::event_id.eq(event_id))
            .order(registrations::created_at.desc())
            .select(RegistrationRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_registration).collect()
    }

    async fn history_for_email(
        &self,
        email: &str,
    ) -> Result<Vec<AttendeeHistoryEntry>, RegistrationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(RegistrationRow, EventRow)> = registrations::table
            .inner_join(events::table)
            .filter(registrations::email.eq(email))
            .order(registrations::created_at.desc())
            .select((RegistrationRow::as_select(), EventRow::as_select()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows
            .into_iter()
            .map(|(registration, event)| AttendeeHistoryEntry {
                registered_at: registration.created_at,
                event_title: event.title,
                event_date: event.event_date,
                event_time: event.event_time,
                venue: event.venue,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> RegistrationRow {
        RegistrationRow {
            id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            name: "Priya Sharma".to_owned(),
            email: "priya@example.com".to_owned(),
            branch: "CSE".to_owned(),
            year: "3rd".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(
            repo_err,
            RegistrationRepositoryError::Connection { .. }
        ));
        assert!(repo_err.to_string().contains("connection refused"));
    }

    #[rstest]
    fn diesel_error_maps_to_query_error() {
        let repo_err = map_diesel_error(DieselError::NotFound);

        assert!(matches!(repo_err, RegistrationRepositoryError::Query { .. }));
        assert!(repo_err.to_string().contains("record not found"));
    }

    #[rstest]
    fn row_conversion_builds_validated_attendees(valid_row: RegistrationRow) {
        let registration = row_to_registration(valid_row).expect("valid row converts");
        assert_eq!(registration.attendee.email(), "priya@example.com");
    }

    #[rstest]
    fn row_conversion_rejects_blank_fields(mut valid_row: RegistrationRow) {
        valid_row.email = "  ".to_owned();

        let error = row_to_registration(valid_row).expect_err("blank email fails");
        assert!(matches!(error, RegistrationRepositoryError::Query { .. }));
        assert!(error.to_string().contains("email"));
    }
}
