//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use std::str::FromStr;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{NewUserOutcome, NewUserRecord, UserRepository, UserRepositoryError};
use crate::domain::{Role, UserRecord};

use super::error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed implementation of the user repository port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> UserRepositoryError {
    map_basic_pool_error(error, UserRepositoryError::connection)
}

fn map_diesel_error(error: DieselError) -> UserRepositoryError {
    map_basic_diesel_error(
        error,
        UserRepositoryError::query,
        UserRepositoryError::connection,
    )
}

/// Convert a database row into a domain account record.
fn row_to_record(row: UserRow) -> Result<UserRecord, UserRepositoryError> {
    let UserRow {
        id,
        display_name,
        email,
        password_digest,
        role,
        created_at: _,
        updated_at: _,
    } = row;

    let role = Role::from_str(&role).map_err(|err| UserRepositoryError::query(err.to_string()))?;

    Ok(UserRecord {
        id,
        display_name,
        email,
        password_digest,
        role,
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, record: &NewUserRecord) -> Result<NewUserOutcome, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: record.id,
            display_name: &record.display_name,
            email: &record.email,
            password_digest: &record.password_digest,
            role: record.role.as_str(),
        };

        match diesel::insert_into(users::table)
            .values(&new_row)
            .execute(&mut conn)
            .await
        {
            Ok(_) => Ok(NewUserOutcome::Created(record.id)),
            Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
                Ok(NewUserOutcome::DuplicateEmail)
            }
            Err(error) => Err(map_diesel_error(error)),
        }
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserRecord>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UserRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(id)
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_record).transpose()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for error mapping and row conversion edge cases.

    use chrono::Utc;
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valid_row() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            display_name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password_digest: "salt$digest".to_owned(),
            role: "attendee".to_owned(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[rstest]
    fn pool_error_maps_to_connection_error() {
        let repo_err = map_pool_error(PoolError::checkout("connection refused"));

        assert!(matches!(repo_err, UserRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn row_conversion_parses_roles(valid_row: UserRow) {
        let record = row_to_record(valid_row).expect("valid row converts");
        assert_eq!(record.role, Role::Attendee);
    }

    #[rstest]
    fn row_conversion_rejects_unknown_roles(mut valid_row: UserRow) {
        valid_row.role = "owner".to_owned();

        let error = row_to_record(valid_row).expect_err("unknown role fails");
        assert!(matches!(error, UserRepositoryError::Query { .. }));
        assert!(error.to_string().contains("owner"));
    }
}
