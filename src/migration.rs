//! Create the three tables and their foreign keys. Every statement is idempotent,
//! so this runs on each start.

use crate::error::AppError;
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS restaurants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        address TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        ingredients TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS restaurant_pizzas (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
        restaurant_id INTEGER NOT NULL REFERENCES restaurants (id),
        pizza_id INTEGER NOT NULL REFERENCES pizzas (id)
    )
    "#,
    "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
    "CREATE INDEX IF NOT EXISTS ix_restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
];

/// Tables the service reads and writes, parents first.
pub const TABLES: [&str; 3] = ["restaurants", "pizzas", "restaurant_pizzas"];

/// Apply the schema in dependency order: parents first, then the join table and its indexes.
pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    for sql in SCHEMA {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(statements = SCHEMA.len(), "schema up to date");
    Ok(())
}

/// Tables from [`TABLES`] absent from the database. Empty once migrations have run.
pub async fn missing_tables(pool: &SqlitePool) -> Result<Vec<&'static str>, AppError> {
    let present: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;
    Ok(TABLES
        .into_iter()
        .filter(|t| !present.iter().any(|p| p == t))
        .collect())
}
