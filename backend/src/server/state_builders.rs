//! Construction of database-backed state at startup.

use std::sync::Arc;

use diesel_migrations::{EmbeddedMigrations, embed_migrations};
use tracing::{info, warn};

use eventify_backend::domain::{
    EventAdminService, EventCatalogueService, ProfileService, RegistrationService,
};
use eventify_backend::inbound::http::state::HttpState;
use eventify_backend::outbound::persistence::{
    DbPool, DieselEventRepository, DieselIdentityService, DieselRegistrationRepository,
    DieselUserRepository, PoolConfig,
};

use super::config::ServerConfig;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Run pending migrations and build the connection pool, when configured.
///
/// Without `DATABASE_URL` the server still comes up on fixture ports so the
/// HTTP surface stays testable.
pub async fn prepare_database(config: &ServerConfig) -> std::io::Result<Option<DbPool>> {
    let Some(url) = config.database_url() else {
        warn!("DATABASE_URL not set; serving with fixture ports");
        return Ok(None);
    };

    run_migrations(url.to_owned()).await?;

    let pool = DbPool::new(PoolConfig::new(url))
        .await
        .map_err(|error| std::io::Error::other(error.to_string()))?;
    info!("database pool ready");
    Ok(Some(pool))
}

async fn run_migrations(database_url: String) -> std::io::Result<()> {
    tokio::task::spawn_blocking(move || {
        use diesel::Connection;
        use diesel_migrations::MigrationHarness;

        let mut conn = diesel::PgConnection::establish(&database_url).map_err(|error| {
            std::io::Error::other(format!("database connection failed: {error}"))
        })?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|error| std::io::Error::other(format!("migrations failed: {error}")))?;
        if !applied.is_empty() {
            info!(count = applied.len(), "migrations applied");
        }
        Ok(())
    })
    .await
    .map_err(|error| std::io::Error::other(format!("migration task failed: {error}")))?
}

/// Wire HTTP state: Diesel adapters when a pool exists, fixtures otherwise.
pub fn build_http_state(pool: Option<DbPool>) -> HttpState {
    let Some(pool) = pool else {
        return HttpState::default();
    };

    let events = Arc::new(DieselEventRepository::new(pool.clone()));
    let registrations = Arc::new(DieselRegistrationRepository::new(pool.clone()));
    let users = Arc::new(DieselUserRepository::new(pool.clone()));

    HttpState {
        catalogue: Arc::new(EventCatalogueService::new(events.clone())),
        admin: Arc::new(EventAdminService::new(events, registrations.clone())),
        registrations: Arc::new(RegistrationService::new(registrations.clone())),
        profile: Arc::new(ProfileService::new(users, registrations)),
        identity: Arc::new(DieselIdentityService::new(DieselUserRepository::new(pool))),
    }
}
