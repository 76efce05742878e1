//! Sample rows for local development.

use crate::error::AppError;
use sqlx::SqlitePool;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (restaurant index, pizza index, price), indexes into the tables above.
const PRICES: &[(usize, usize, i64)] = &[(0, 0, 1), (1, 1, 4), (2, 2, 5)];

/// Insert the sample set in one transaction. Does nothing and returns false when
/// any restaurant already exists.
pub async fn seed_sample_data(pool: &SqlitePool) -> Result<bool, AppError> {
    let mut tx = pool.begin().await?;
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM restaurants")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!(existing, "restaurants present, skipping seed");
        return Ok(false);
    }

    let mut restaurant_ids = Vec::with_capacity(RESTAURANTS.len());
    for &(name, address) in RESTAURANTS {
        let id = sqlx::query("INSERT INTO restaurants (name, address) VALUES (?, ?)")
            .bind(name)
            .bind(address)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        restaurant_ids.push(id);
    }

    let mut pizza_ids = Vec::with_capacity(PIZZAS.len());
    for &(name, ingredients) in PIZZAS {
        let id = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES (?, ?)")
            .bind(name)
            .bind(ingredients)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();
        pizza_ids.push(id);
    }

    for &(r, p, price) in PRICES {
        sqlx::query("INSERT INTO restaurant_pizzas (price, restaurant_id, pizza_id) VALUES (?, ?, ?)")
            .bind(price)
            .bind(restaurant_ids[r])
            .bind(pizza_ids[p])
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!(
        restaurants = RESTAURANTS.len(),
        pizzas = PIZZAS.len(),
        restaurant_pizzas = PRICES.len(),
        "sample data seeded"
    );
    Ok(true)
}
