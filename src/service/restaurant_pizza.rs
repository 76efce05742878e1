use crate::error::AppError;
use crate::models::{NewRestaurantPizza, RestaurantPizza, RestaurantPizzaWithPizza};
use crate::response::CreatedRestaurantPizza;
use crate::service::{PizzaService, RestaurantService};
use sqlx::{SqliteConnection, SqlitePool};

pub struct RestaurantPizzaService;

impl RestaurantPizzaService {
    /// Insert one association after confirming both parents exist. Nothing is
    /// committed unless the insert succeeds.
    pub async fn create(
        pool: &SqlitePool,
        new: &NewRestaurantPizza,
    ) -> Result<CreatedRestaurantPizza, AppError> {
        let mut tx = pool.begin().await?;
        let pizza = PizzaService::find(&mut tx, new.pizza_id).await?;
        let restaurant = RestaurantService::find(&mut tx, new.restaurant_id).await?;
        let (Some(pizza), Some(restaurant)) = (pizza, restaurant) else {
            return Err(AppError::MissingReference);
        };

        let sql = "INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id) VALUES (?, ?, ?)";
        tracing::debug!(sql = %sql, params = ?new, "query (tx)");
        let id = sqlx::query(sql)
            .bind(new.price)
            .bind(new.pizza_id)
            .bind(new.restaurant_id)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        tx.commit().await?;

        tracing::info!(id, pizza_id = new.pizza_id, restaurant_id = new.restaurant_id, "restaurant pizza created");
        let row = RestaurantPizza {
            id,
            price: new.price,
            pizza_id: new.pizza_id,
            restaurant_id: new.restaurant_id,
        };
        Ok(CreatedRestaurantPizza::new(row, pizza, restaurant))
    }

    /// A restaurant's associations joined with their pizzas, ordered by id.
    pub async fn list_by_restaurant(
        conn: &mut SqliteConnection,
        restaurant_id: i64,
    ) -> Result<Vec<RestaurantPizzaWithPizza>, AppError> {
        let sql = r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = ?
            ORDER BY rp.id
        "#;
        tracing::debug!(sql = %sql, restaurant_id, "query");
        let rows = sqlx::query_as::<_, RestaurantPizzaWithPizza>(sql)
            .bind(restaurant_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows)
    }
}
