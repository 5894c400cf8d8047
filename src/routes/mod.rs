pub mod common;
pub mod productos;

pub use common::common_routes;
pub use productos::producto_routes;

use crate::state::AppState;
use axum::Router;
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Full application router: producto and status routes, static images,
/// permissive CORS for the storefront, request tracing.
pub fn app(state: AppState, images_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(producto_routes(state))
        .nest_service("/images", ServeDir::new(images_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
