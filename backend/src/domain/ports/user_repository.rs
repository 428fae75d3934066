//! Port for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Role, UserRecord};

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Fields for a new account row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub password_digest: String,
    pub role: Role,
}

/// Discriminated result of an account insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewUserOutcome {
    /// The account was created with the given id.
    Created(Uuid),
    /// An account with this email already exists; nothing was written.
    DuplicateEmail,
}

/// Port for reading and creating accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account, reporting email collisions as a value.
    async fn insert(&self, record: &NewUserRecord) -> Result<NewUserOutcome, UserRepositoryError>;

    /// Find an account by exact email match.
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserRecord>, UserRepositoryError>;

    /// Find an account by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, UserRepositoryError>;
}
