use axum::extract::State;
use axum::routing::get;
use axum::{middleware, Extension, Json, Router};
use tracing::{info, warn};

use crate::auth::{require_auth, AuthUser};
use crate::errors::AppError;
use crate::models::PortfolioSeries;
use crate::services::portfolio_service;
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

pub async fn home(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PortfolioSeries>, AppError> {
    info!("GET / - Building portfolio series for user {}", user.id);
    let series = portfolio_service::portfolio_series(&state.pool, user.id)
        .await
        .map_err(|e| {
            warn!("Failed to build portfolio series for user {}: {}", user.id, e);
            e
        })?;
    Ok(Json(series))
}
