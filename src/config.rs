//! Process configuration, read from the environment once at startup and
//! passed down explicitly. No module-level globals.

use crate::error::ConfigError;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_IMAGES_DIR: &str = "public/img";
const MAX_CONNECTIONS: u32 = 5;
/// Upper bound on waiting for a session, so a dead database turns into a 500
/// instead of a hung request.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listen port (`PORT`).
    pub port: u16,
    /// Directory served under `/images` (`IMAGES_DIR`).
    pub images_dir: String,
    pub db: DbConfig,
}

/// Connection settings for the productos database. Credentials have no
/// defaults; the process refuses to start without them.
#[derive(Clone, Debug)]
pub struct DbConfig {
    pub server: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// TLS is always on; when true the server certificate is not verified
    /// (every environment except production).
    pub trust_server_certificate: bool,
    pub acquire_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            port: optional_parsed("PORT", DEFAULT_PORT)?,
            images_dir: std::env::var("IMAGES_DIR").unwrap_or_else(|_| DEFAULT_IMAGES_DIR.into()),
            db: DbConfig::from_env()?,
        })
    }
}

impl DbConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_default();
        Ok(Self {
            server: required("DB_SERVER")?,
            port: optional_parsed("DB_PORT", DEFAULT_DB_PORT)?,
            database: required("DB_DATABASE")?,
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            trust_server_certificate: app_env != "production",
            acquire_timeout: ACQUIRE_TIMEOUT,
        })
    }

    fn ssl_mode(&self) -> PgSslMode {
        if self.trust_server_certificate {
            PgSslMode::Require
        } else {
            PgSslMode::VerifyFull
        }
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.server)
            .port(self.port)
            .database(&self.database)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(self.ssl_mode())
    }

    /// Lazy pool: no connection is attempted until the first request needs
    /// one, so startup never depends on database availability.
    pub fn pool(&self) -> PgPool {
        PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(self.acquire_timeout)
            .connect_lazy_with(self.connect_options())
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar(var))
}

fn optional_parsed(var: &'static str, default: u16) -> Result<u16, ConfigError> {
    match std::env::var(var) {
        Err(_) => Ok(default),
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidVar { var, value }),
    }
}
