//! Account types and the session identity vocabulary.
//!
//! Authentication mechanics (cookies, digests) live in the adapters; the
//! domain only defines validated credential shapes and the identity that a
//! session carries.

use uuid::Uuid;

/// Role attached to an account and to its session identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Regular attendee: may browse events and register.
    Attendee,
    /// Administrator: may additionally manage event listings.
    Admin,
}

/// Failure raised when parsing a role from its stored representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {value}")]
pub struct RoleParseError {
    value: String,
}

impl Role {
    /// Stable string form used in storage and session cookies.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attendee => "attendee",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "attendee" => Ok(Self::Attendee),
            "admin" => Ok(Self::Admin),
            other => Err(RoleParseError {
                value: other.to_owned(),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticated identity stored in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Account identifier.
    pub user_id: Uuid,
    /// Role granted to the account.
    pub role: Role,
}

/// Account row as the identity adapters see it.
///
/// The password digest is opaque to the domain; only the identity adapter
/// interprets it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub password_digest: String,
    pub role: Role,
}

/// Validation failures raised when constructing [`SignupDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SignupValidationError {
    /// Name is empty after trimming.
    #[error("name must not be empty")]
    EmptyName,
    /// Email is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password is empty after trimming.
    #[error("password must not be empty")]
    EmptyPassword,
    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

/// Validated signup form: trimmed name/email, confirmed password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    name: String,
    email: String,
    password: String,
}

impl SignupDetails {
    /// Validate the signup form fields.
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, SignupValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SignupValidationError::EmptyName);
        }
        let email = email.trim();
        if email.is_empty() {
            return Err(SignupValidationError::EmptyEmail);
        }
        let password = password.trim();
        if password.is_empty() {
            return Err(SignupValidationError::EmptyPassword);
        }
        if password != confirm_password.trim() {
            return Err(SignupValidationError::PasswordMismatch);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Display name for the new account.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email for the new account; unique across accounts.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// The confirmed plaintext password, to be digested by the adapter.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validation failures raised when constructing [`LoginCredentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginValidationError {
    /// Email is empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Password is empty after trimming.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Validated login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Validate the login form fields.
    pub fn new(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        let password = password.trim();
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }
        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }

    /// Login email; matched exactly against stored accounts.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Submitted plaintext password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
