//! Backend entry-point: wires REST endpoints, sessions, and OpenAPI docs.

mod server;

use actix_web::{HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use eventify_backend::inbound::http::health::HealthState;
use server::{AppDependencies, ServerConfig, build_app, build_http_state, prepare_database};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = ServerConfig::from_env()?;
    let pool = prepare_database(&config).await?;
    let http_state = web::Data::new(build_http_state(pool));
    let health_state = web::Data::new(HealthState::new());

    // Clone for server factory so the readiness probe remains accessible.
    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        key: config.key(),
        cookie_secure: config.cookie_secure(),
    };
    let server = HttpServer::new(move || build_app(deps.clone())).bind(config.bind_addr())?;

    health_state.mark_ready();
    info!(addr = %config.bind_addr(), "listening");
    server.run().await
}
