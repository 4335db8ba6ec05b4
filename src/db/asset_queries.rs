use sqlx::SqlitePool;

use crate::models::Asset;

/// Ordered by id so callers get a stable order for equal values.
pub async fn fetch_all_for_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Asset>, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        "SELECT id, user_id, ticker, quantity, average_price, current_price
         FROM assets
         WHERE user_id = ?
         ORDER BY id ASC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn fetch_one(pool: &SqlitePool, id: i64) -> Result<Option<Asset>, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        "SELECT id, user_id, ticker, quantity, average_price, current_price
         FROM assets
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn insert(
    pool: &SqlitePool,
    user_id: i64,
    ticker: &str,
    quantity: i64,
    average_price: f64,
    current_price: Option<f64>,
) -> Result<Asset, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        "INSERT INTO assets (user_id, ticker, quantity, average_price, current_price)
         VALUES (?, ?, ?, ?, ?)
         RETURNING id, user_id, ticker, quantity, average_price, current_price",
    )
    .bind(user_id)
    .bind(ticker)
    .bind(quantity)
    .bind(average_price)
    .bind(current_price)
    .fetch_one(pool)
    .await
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    ticker: &str,
    quantity: i64,
    average_price: f64,
    current_price: Option<f64>,
) -> Result<Option<Asset>, sqlx::Error> {
    sqlx::query_as::<_, Asset>(
        "UPDATE assets
         SET ticker = ?, quantity = ?, average_price = ?, current_price = ?
         WHERE id = ?
         RETURNING id, user_id, ticker, quantity, average_price, current_price",
    )
    .bind(ticker)
    .bind(quantity)
    .bind(average_price)
    .bind(current_price)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM assets WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete_all_for_user(pool: &SqlitePool, user_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM assets WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_for_user(pool: &SqlitePool, user_id: i64) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(pool)
        .await
}
