//! Row-backed tests against a real PostgreSQL database. Ignored by default;
//! point DATABASE_URL at a disposable database and run:
//!
//!   DATABASE_URL=postgres://localhost/productos_test \
//!     cargo test --test live_db -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use productos_api::{app, AppState};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tower::ServiceExt;

async fn live_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .unwrap();
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS productos (
            id integer PRIMARY KEY,
            titulo text NOT NULL,
            descripcion text NOT NULL,
            img text NOT NULL,
            precio double precision NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query("TRUNCATE productos").execute(&pool).await.unwrap();
    pool
}

async fn insert(pool: &PgPool, id: i32, titulo: &str, descripcion: &str, img: &str, precio: f64) {
    sqlx::query("INSERT INTO productos (id, titulo, descripcion, img, precio) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind(titulo)
        .bind(descripcion)
        .bind(img)
        .bind(precio)
        .execute(pool)
        .await
        .unwrap();
}

async fn get(router: &axum::Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}

// Single test so the shared productos table is never raced by parallel cases.
#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a disposable PostgreSQL database"]
async fn read_contract_against_live_rows() {
    let pool = live_pool().await;
    let router = app(AppState { pool: pool.clone() }, "public/img");

    // Empty table lists as an empty JSON array.
    let (status, body) = get(&router, "/productos").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "[]");

    insert(
        &pool,
        1,
        "Reloj diamantes",
        "Reloj de diamantes plata fondo azul masculino",
        "/images/reloj-azul.png",
        159900.99,
    )
    .await;
    insert(&pool, 2, "Anillo", "Anillo de oro", "/images/anillo.png", 80000.0).await;

    // List length equals the current row count.
    let (status, body) = get(&router, "/productos").await;
    assert_eq!(status, StatusCode::OK);
    let rows: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 2);

    // Present id: 200 with the single object, id echoing the request.
    let (status, body) = get(&router, "/productos/1").await;
    assert_eq!(status, StatusCode::OK);
    let row: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        row,
        serde_json::json!({
            "id": 1,
            "titulo": "Reloj diamantes",
            "descripcion": "Reloj de diamantes plata fondo azul masculino",
            "img": "/images/reloj-azul.png",
            "precio": 159900.99
        })
    );

    // Unchanged backing data: repeated reads are byte-identical.
    let (_, again) = get(&router, "/productos/1").await;
    assert_eq!(body, again);

    // Absent id: 404 with the plain-text body.
    let (status, body) = get(&router, "/productos/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Producto no encontrado");

    sqlx::query("TRUNCATE productos").execute(&pool).await.unwrap();
}
