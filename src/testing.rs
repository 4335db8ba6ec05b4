use sqlx::SqlitePool;

use crate::db;

/// Fresh in-memory database with migrations applied.
pub async fn test_pool() -> SqlitePool {
    db::connect("sqlite::memory:").await.expect("in-memory database")
}

/// Inserts a user directly, skipping password hashing.
pub async fn create_user(pool: &SqlitePool, email: &str) -> i64 {
    db::user_queries::insert(pool, email, email, "not-a-real-hash")
        .await
        .expect("insert test user")
        .id
}
