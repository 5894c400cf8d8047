//! Producto routes. `:id` is taken as a raw segment; the handler validates it.

use crate::handlers::productos::{get_producto, list_productos};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn producto_routes(state: AppState) -> Router {
    Router::new()
        .route("/productos", get(list_productos))
        .route("/productos/:id", get(get_producto))
        .with_state(state)
}
