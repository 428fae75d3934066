//! HTTP server configuration from the environment.

use std::env;
use std::net::SocketAddr;

use actix_web::cookie::Key;
use tracing::warn;

/// Runtime configuration resolved once at startup.
pub struct ServerConfig {
    bind_addr: SocketAddr,
    key: Key,
    cookie_secure: bool,
    database_url: Option<String>,
}

impl ServerConfig {
    /// Resolve configuration from environment variables.
    ///
    /// - `BIND_ADDR`: listen address, default `0.0.0.0:8080`.
    /// - `SESSION_KEY_FILE`: file holding the session key material; absent
    ///   files fall back to an ephemeral key in debug builds or when
    ///   `SESSION_ALLOW_EPHEMERAL=1`.
    /// - `SESSION_COOKIE_SECURE`: set to `0` to allow plain-HTTP cookies.
    /// - `DATABASE_URL`: PostgreSQL connection string; without it the
    ///   server runs on fixture ports only.
    pub fn from_env() -> std::io::Result<Self> {
        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_owned())
            .parse()
            .map_err(|error| {
                std::io::Error::other(format!("invalid BIND_ADDR: {error}"))
            })?;

        let cookie_secure = env::var("SESSION_COOKIE_SECURE")
            .map(|value| value != "0")
            .unwrap_or(true);

        Ok(Self {
            bind_addr,
            key: load_session_key()?,
            cookie_secure,
            database_url: env::var("DATABASE_URL").ok(),
        })
    }

    /// Address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Session signing/encryption key.
    pub fn key(&self) -> Key {
        self.key.clone()
    }

    /// Whether session cookies require HTTPS.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure
    }

    /// PostgreSQL connection string, when configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }
}

fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".to_owned());
    match std::fs::read(&key_path) {
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(error) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %error, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {error}"
                )))
            }
        }
    }
}
