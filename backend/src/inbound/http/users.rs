//! Account and profile HTTP handlers.
//!
//! ```text
//! POST /api/v1/auth/signup {"name":"Ada","email":"ada@example.com","password":"…","confirmPassword":"…"}
//! POST /api/v1/auth/login  {"email":"ada@example.com","password":"…"}
//! POST /api/v1/auth/logout
//! GET  /api/v1/profile/registrations
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    AttendeeHistoryEntry, Error, LoginCredentials, LoginValidationError, SignupDetails,
    SignupValidationError,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Signup request body.
///
/// Absent fields deserialise as empty strings and fail validation the same
/// way blank ones do.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Response payload for a created account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreatedBody {
    #[schema(format = "uuid")]
    pub user_id: String,
}

/// Login request body.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// One row of the attendee's registration history.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryBody {
    #[schema(format = "date-time")]
    pub registered_at: String,
    pub event_title: String,
    #[schema(example = "2026-09-12")]
    pub event_date: String,
    #[schema(example = "18:30:00")]
    pub event_time: String,
    pub venue: String,
}

impl From<AttendeeHistoryEntry> for HistoryEntryBody {
    fn from(entry: AttendeeHistoryEntry) -> Self {
        Self {
            registered_at: entry.registered_at.to_rfc3339(),
            event_title: entry.event_title,
            event_date: entry.event_date.to_string(),
            event_time: entry.event_time.format("%H:%M:%S").to_string(),
            venue: entry.venue,
        }
    }
}

fn map_signup_validation_error(err: SignupValidationError) -> Error {
    let field = match err {
        SignupValidationError::EmptyName => "name",
        SignupValidationError::EmptyEmail => "email",
        SignupValidationError::EmptyPassword => "password",
        SignupValidationError::PasswordMismatch => "confirmPassword",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": "invalid_field" }))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let field = match err {
        LoginValidationError::EmptyEmail => "email",
        LoginValidationError::EmptyPassword => "password",
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": "invalid_field" }))
}

/// Create an attendee account.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = AccountCreatedBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already registered", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signUp",
    security([])
)]
#[post("/auth/signup")]
pub async fn sign_up(
    state: web::Data<HttpState>,
    payload: web::Json<SignupRequest>,
) -> ApiResult<HttpResponse> {
    let SignupRequest {
        name,
        email,
        password,
        confirm_password,
    } = payload.into_inner();

    let signup = SignupDetails::new(&name, &email, &password, &confirm_password)
        .map_err(map_signup_validation_error)?;
    let user_id = state.identity.sign_up(signup).await?;
    Ok(HttpResponse::Created().json(AccountCreatedBody {
        user_id: user_id.to_string(),
    }))
}

/// Authenticate and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 204, description = "Login success", headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials =
        LoginCredentials::new(&email, &password).map_err(map_login_validation_error)?;

    let identity = state.identity.authenticate(&credentials).await?;
    session.persist_identity(&identity)?;
    Ok(HttpResponse::NoContent().finish())
}

/// End the current session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session ended")
    ),
    tags = ["auth"],
    operation_id = "logout",
    security(("SessionCookie" = []))
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

/// The logged-in attendee's registration history.
#[utoipa::path(
    get,
    path = "/api/v1/profile/registrations",
    responses(
        (status = 200, description = "Registration history", body = [HistoryEntryBody]),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["profile"],
    operation_id = "profileRegistrations",
    security(("SessionCookie" = []))
)]
#[get("/profile/registrations")]
pub async fn profile_registrations(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<HistoryEntryBody>>> {
    let identity = session.require_user()?;

    let history = state.profile.registration_history(identity.user_id).await?;
    Ok(web::Json(
        history.into_iter().map(HistoryEntryBody::from).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test, web};
    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime, Utc};
    use serde_json::Value;
    use uuid::Uuid;

    use super::*;
    use crate::domain::ports::AttendeeProfile;
    use crate::inbound::http::test_utils;

    struct StubProfile {
        entries: Vec<AttendeeHistoryEntry>,
    }

    #[async_trait]
    impl AttendeeProfile for StubProfile {
        async fn registration_history(
            &self,
            _user_id: Uuid,
        ) -> Result<Vec<AttendeeHistoryEntry>, Error> {
            Ok(self.entries.clone())
        }
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_utils::test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(sign_up)
                    .service(login)
                    .service(logout)
                    .service(profile_registrations),
            )
    }

    fn signup_json(name: &str, email: &str, password: &str, confirm: &str) -> Value {
        serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "confirmPassword": confirm,
        })
    }

    #[actix_web::test]
    async fn signup_creates_an_account() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(signup_json("Ada", "ada@example.com", "secret", "secret"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let body: AccountCreatedBody = test::read_body_json(res).await;
        assert!(Uuid::parse_str(&body.user_id).is_ok());
    }

    #[actix_web::test]
    async fn signup_rejects_mismatched_passwords() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/signup")
                .set_json(signup_json("Ada", "ada@example.com", "secret", "other"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let value: Value = test::read_body_json(res).await;
        assert_eq!(value["message"], "passwords do not match");
        assert_eq!(value["details"]["field"], "confirmPassword");
    }

    #[actix_web::test]
    async fn login_sets_a_session_cookie() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({
                    "email": "ada@example.com",
                    "password": "password",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
        assert!(
            res.response()
                .cookies()
                .any(|cookie| cookie.name() == "session"),
            "login sets the session cookie"
        );
    }

    #[actix_web::test]
    async fn login_rejects_unknown_credentials() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({
                    "email": "ada@example.com",
                    "password": "wrong",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn login_rejects_blank_fields() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({ "email": "  ", "password": "pw" }))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        let value: Value = test::read_body_json(res).await;
        assert_eq!(value["details"]["field"], "email");
    }

    #[actix_web::test]
    async fn logout_always_ends_the_session() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/logout")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn profile_requires_a_session() {
        let app = test::init_service(test_app(HttpState::default())).await;

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/profile/registrations")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn profile_lists_history_after_login() {
        let entry = AttendeeHistoryEntry {
            registered_at: Utc::now(),
            event_title: "Tech Talk".to_owned(),
            event_date: NaiveDate::from_ymd_opt(2026, 9, 12).expect("valid date"),
            event_time: NaiveTime::from_hms_opt(18, 30, 0).expect("valid time"),
            venue: "Main Auditorium".to_owned(),
        };
        let state = HttpState {
            profile: Arc::new(StubProfile {
                entries: vec![entry],
            }),
            ..HttpState::default()
        };
        let app = test::init_service(test_app(state)).await;

        let login_res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/v1/auth/login")
                .set_json(serde_json::json!({
                    "email": "ada@example.com",
                    "password": "password",
                }))
                .to_request(),
        )
        .await;
        let cookie = login_res
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .expect("session cookie set")
            .into_owned();

        let res = test::call_service(
            &app,
            test::TestRequest::get()
                .uri("/api/v1/profile/registrations")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);

        let body: Vec<HistoryEntryBody> = test::read_body_json(res).await;
        let first = body.first().expect("one entry");
        assert_eq!(first.event_title, "Tech Talk");
        assert_eq!(first.event_time, "18:30:00");
    }
}
