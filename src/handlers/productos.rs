//! Producto read handlers: list all, get by id.

use crate::error::ApiError;
use crate::model::Producto;
use crate::service::ProductoService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// The id arrives as a raw path segment so that validation happens here,
/// before any database access, with a definite 400 on failure.
fn parse_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

/// Uniqueness of `id` means the lookup yields at most one row; absence is 404.
fn require_found(id: i32, producto: Option<Producto>) -> Result<Producto, ApiError> {
    producto.ok_or(ApiError::NotFound(id))
}

pub async fn list_productos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Producto>>, ApiError> {
    let productos = ProductoService::list(&state.pool).await?;
    Ok(Json(productos))
}

pub async fn get_producto(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Producto>, ApiError> {
    let id = parse_id(&id)?;
    let producto = require_found(id, ProductoService::get(&state.pool, id).await?)?;
    Ok(Json(producto))
}
