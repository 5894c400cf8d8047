//! Read-only query execution against the productos table.

use crate::error::ApiError;
use crate::model::Producto;
use sqlx::PgPool;

pub struct ProductoService;

impl ProductoService {
    /// All rows, in whatever order the database returns them.
    pub async fn list(pool: &PgPool) -> Result<Vec<Producto>, ApiError> {
        const SQL: &str = "SELECT id, titulo, descripcion, img, precio FROM productos";
        tracing::debug!(sql = SQL, "query");
        let productos = sqlx::query_as::<_, Producto>(SQL).fetch_all(pool).await?;
        Ok(productos)
    }

    /// One row by primary key. The id is bound, never interpolated.
    pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Producto>, ApiError> {
        const SQL: &str =
            "SELECT id, titulo, descripcion, img, precio FROM productos WHERE id = $1";
        tracing::debug!(sql = SQL, id, "query");
        let producto = sqlx::query_as::<_, Producto>(SQL)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(producto)
    }
}
