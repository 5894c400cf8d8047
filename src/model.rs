//! Catalog row shape. Field names are the native column names and double as
//! the JSON contract.

use serde::Serialize;

/// One row of the `productos` table. Rows are created and mutated outside
/// this system; here they are only read.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Producto {
    pub id: i32,
    pub titulo: String,
    pub descripcion: String,
    pub img: String,
    pub precio: f64,
}
