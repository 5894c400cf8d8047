//! Read-only HTTP API over the productos catalog table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;

pub use config::{AppConfig, DbConfig};
pub use error::{ApiError, ConfigError};
pub use model::Producto;
pub use routes::{app, common_routes, producto_routes};
pub use service::ProductoService;
pub use state::AppState;
