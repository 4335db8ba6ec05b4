use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::TokenIssuer;
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenIssuer>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenIssuer) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
        }
    }

    pub fn from_config(pool: SqlitePool, config: &AppConfig) -> Self {
        Self::new(pool, TokenIssuer::new(&config.jwt_secret, config.jwt_expiry_hours))
    }
}
