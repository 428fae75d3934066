//! Test helpers for inbound HTTP components.

use std::str::FromStr;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{HttpResponse, test, web};
use uuid::Uuid;

use crate::domain::{Error, Role, SessionIdentity};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;

/// Fixed user id seeded into test sessions.
pub const SEEDED_USER_ID: Uuid = Uuid::from_u128(7);

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Handler for a test-only route that logs a fixture identity in.
///
/// Mount as `/seed-session/{role}` so tests can obtain a session cookie for
/// either role without exercising the login flow.
pub async fn seed_session(
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let role = Role::from_str(&path.into_inner())
        .map_err(|error| Error::invalid_request(error.to_string()))?;
    session.persist_identity(&SessionIdentity {
        user_id: SEEDED_USER_ID,
        role,
    })?;
    Ok(HttpResponse::NoContent().finish())
}

/// Obtain a session cookie for the given role via the seed route.
pub async fn session_cookie<S, B>(app: &S, role: Role) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let res = test::call_service(
        app,
        test::TestRequest::post()
            .uri(&format!("/seed-session/{role}"))
            .to_request(),
    )
    .await;
    assert!(res.status().is_success(), "seeding the session succeeds");
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}
