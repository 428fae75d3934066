//! Diesel-backed `IdentityService` adapter built on `DieselUserRepository`.
//!
//! Signup digests the password with a fresh salt before the account row is
//! written; login looks the account up by exact email and compares digests
//! in constant time. Lookup failure and digest mismatch share one error
//! message so responses do not reveal which emails have accounts.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{
    IdentityService, NewUserOutcome, NewUserRecord, UserRepository, UserRepositoryError,
};
use crate::domain::{Error, LoginCredentials, Role, SessionIdentity, SignupDetails};

use super::diesel_user_repository::DieselUserRepository;
use super::password::{hash_password, verify_password};

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

/// Diesel-backed identity adapter.
#[derive(Clone)]
pub struct DieselIdentityService {
    users: Arc<dyn UserRepository>,
}

impl DieselIdentityService {
    /// Create a new service backed by a Diesel user repository.
    pub fn new(users: DieselUserRepository) -> Self {
        Self {
            users: Arc::new(users),
        }
    }

    #[cfg(test)]
    fn from_repository(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl IdentityService for DieselIdentityService {
    async fn sign_up(&self, signup: SignupDetails) -> Result<Uuid, Error> {
        let record = NewUserRecord {
            id: Uuid::new_v4(),
            display_name: signup.name().to_owned(),
            email: signup.email().to_owned(),
            password_digest: hash_password(signup.password()),
            role: Role::Attendee,
        };

        match self
            .users
            .insert(&record)
            .await
            .map_err(map_user_repository_error)?
        {
            NewUserOutcome::Created(user_id) => {
                tracing::info!(%user_id, "account created");
                Ok(user_id)
            }
            NewUserOutcome::DuplicateEmail => Err(Error::conflict("Email already registered.")),
        }
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionIdentity, Error> {
        let account = self
            .users
            .find_by_email(credentials.email())
            .await
            .map_err(map_user_repository_error)?;

        let Some(account) = account else {
            return Err(Error::unauthorized("invalid email or password"));
        };
        if !verify_password(credentials.password(), &account.password_digest) {
            return Err(Error::unauthorized("invalid email or password"));
        }

        Ok(SessionIdentity {
            user_id: account.id,
            role: account.role,
        })
    }
}
