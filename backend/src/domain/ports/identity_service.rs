//! Driving port for account creation and login.
//!
//! In hexagonal terms this is a *driving* port: inbound adapters call it to
//! establish a session identity without knowing (or importing) the backing
//! infrastructure. Credential digest mechanics live entirely in the
//! adapters.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, LoginCredentials, Role, SessionIdentity, SignupDetails};

/// Domain use-case port for identity.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Create an attendee account; duplicate emails are a conflict error.
    async fn sign_up(&self, signup: SignupDetails) -> Result<Uuid, Error>;

    /// Validate credentials and return the identity to store in the session.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionIdentity, Error>;
}

/// In-memory authenticator used by tests and database-less runs.
///
/// `ada@example.com` / `password` authenticates as an attendee and
/// `admin@example.com` / `password` as an administrator, each with a fixed
/// user id. Signup accepts any valid form and returns a fresh id.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureIdentityService;

impl FixtureIdentityService {
    /// Fixture attendee id.
    pub const ATTENDEE_ID: Uuid = Uuid::from_u128(0x3fa8_5f64_5717_4562_b3fc_2c96_3f66_afa6);
    /// Fixture administrator id.
    pub const ADMIN_ID: Uuid = Uuid::from_u128(0x123e_4567_e89b_12d3_a456_4266_1417_4000);
}

#[async_trait]
impl IdentityService for FixtureIdentityService {
    async fn sign_up(&self, _signup: SignupDetails) -> Result<Uuid, Error> {
        Ok(Uuid::new_v4())
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<SessionIdentity, Error> {
        match (credentials.email(), credentials.password()) {
            ("ada@example.com", "password") => Ok(SessionIdentity {
                user_id: Self::ATTENDEE_ID,
                role: Role::Attendee,
            }),
            ("admin@example.com", "password") => Ok(SessionIdentity {
                user_id: Self::ADMIN_ID,
                role: Role::Admin,
            }),
            _ => Err(Error::unauthorized("invalid email or password")),
        }
    }
}
