//! Typed errors and HTTP mapping.
//!
//! Client bodies are plain text; the `Display` impl carries the diagnostic
//! that goes to the server log, never to the wire.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Startup-time configuration problems. These abort the process before the
/// listener is bound.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: '{value}'")]
    InvalidVar { var: &'static str, value: String },
}

/// Per-request failures.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The `:id` path segment did not parse as a base-10 integer. Raised
    /// before any database access.
    #[error("id must be a base-10 integer, got '{0}'")]
    InvalidId(String),
    /// No row in `productos` for the requested id.
    #[error("no producto with id {0}")]
    NotFound(i32),
    /// Could not establish or acquire a database session.
    #[error("database connection: {0}")]
    Connection(#[source] sqlx::Error),
    /// Database reachable but the query itself failed.
    #[error("query execution: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        match &e {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => ApiError::Connection(e),
            _ => ApiError::Query(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "El ID debe ser un número"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "Producto no encontrado"),
            ApiError::Connection(_) | ApiError::Query(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Error en el servidor")
            }
        };
        (status, body).into_response()
    }
}
