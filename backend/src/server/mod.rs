//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;
pub use state_builders::{build_http_state, prepare_database};

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

#[cfg(debug_assertions)]
use eventify_backend::ApiDoc;
use eventify_backend::inbound::http::admin_events::{
    create_event, delete_event, list_event_registrations, update_event,
};
use eventify_backend::inbound::http::events::{get_event, list_events};
use eventify_backend::inbound::http::health::{HealthState, live, ready};
use eventify_backend::inbound::http::registrations::register_attendee;
use eventify_backend::inbound::http::state::HttpState;
use eventify_backend::inbound::http::users::{login, logout, profile_registrations, sign_up};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

/// Everything a worker needs to assemble the application.
#[derive(Clone)]
pub struct AppDependencies {
    pub health_state: web::Data<HealthState>,
    pub http_state: web::Data<HttpState>,
    pub key: Key,
    pub cookie_secure: bool,
}

/// Assemble the application: session middleware, API scope, health probes.
pub fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_same_site(SameSite::Lax)
        .build();

    let api = web::scope("/api/v1")
        .wrap(session)
        .service(sign_up)
        .service(login)
        .service(logout)
        .service(list_events)
        .service(get_event)
        .service(register_attendee)
        .service(profile_registrations)
        .service(create_event)
        .service(update_event)
        .service(delete_event)
        .service(list_event_registrations);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}
