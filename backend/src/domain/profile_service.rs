//! Attendee profile reads.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    AttendeeProfile, RegistrationRepository, RegistrationRepositoryError, UserRepository,
    UserRepositoryError,
};
use crate::domain::{AttendeeHistoryEntry, Error};

fn map_user_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

fn map_registration_repository_error(error: RegistrationRepositoryError) -> Error {
    match error {
        RegistrationRepositoryError::Connection { message } => Error::service_unavailable(
            format!("registration repository unavailable: {message}"),
        ),
        RegistrationRepositoryError::Query { message } => {
            Error::internal(format!("registration repository error: {message}"))
        }
    }
}

/// Profile service joining the account's email with its registrations.
#[derive(Clone)]
pub struct ProfileService<U, R> {
    users: Arc<U>,
    registrations: Arc<R>,
}

impl<U, R> ProfileService<U, R> {
    /// Create a new service with the user and registration repositories.
    pub fn new(users: Arc<U>, registrations: Arc<R>) -> Self {
        Self {
            users,
            registrations,
        }
    }
}

#[async_trait]
impl<U, R> AttendeeProfile for ProfileService<U, R>
where
    U: UserRepository,
    R: RegistrationRepository,
{
    async fn registration_history(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<AttendeeHistoryEntry>, Error> {
        // A session can outlive its account row; treat that as a stale
        // login rather than a missing resource.
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(map_user_repository_error)?
            .ok_or_else(|| Error::unauthorized("account no longer exists"))?;

        self.registrations
            .history_for_email(&user.email)
            .await
            .map_err(map_registration_repository_error)
    }
}
