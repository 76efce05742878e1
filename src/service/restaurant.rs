use crate::error::AppError;
use crate::models::Restaurant;
use crate::response::RestaurantDetail;
use crate::service::RestaurantPizzaService;
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantService;

impl RestaurantService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants ORDER BY id";
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Restaurant>(sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn find(conn: &mut SqliteConnection, id: i64) -> Result<Option<Restaurant>, AppError> {
        let sql = "SELECT id, name, address FROM restaurants WHERE id = ?";
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Restaurant>(sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row)
    }

    /// Restaurant with its pizza associations, read in one transaction.
    pub async fn detail(pool: &SqlitePool, id: i64) -> Result<Option<RestaurantDetail>, AppError> {
        let mut tx = pool.begin().await?;
        let Some(restaurant) = Self::find(&mut tx, id).await? else {
            return Ok(None);
        };
        let associations = RestaurantPizzaService::list_by_restaurant(&mut tx, id).await?;
        tx.commit().await?;
        Ok(Some(RestaurantDetail::new(restaurant, associations)))
    }

    /// Delete the restaurant's associations, then the restaurant, in one transaction.
    /// Returns false when no restaurant has this id.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let mut tx = pool.begin().await?;
        if Self::find(&mut tx, id).await?.is_none() {
            return Ok(false);
        }
        let associations = sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();
        sqlx::query("DELETE FROM restaurants WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        tracing::info!(restaurant_id = id, associations, "restaurant deleted");
        Ok(true)
    }
}
