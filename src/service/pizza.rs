use crate::error::AppError;
use crate::models::Pizza;
use sqlx::{SqliteConnection, SqlitePool};

pub struct PizzaService;

impl PizzaService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Pizza>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Pizza>, AppError> {
        let sql = "SELECT id, name, ingredients FROM pizzas WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Pizza>(sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }
}
