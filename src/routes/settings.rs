use axum::extract::State;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use tracing::{info, warn};

use crate::auth::{require_auth, AuthUser};
use crate::errors::AppError;
use crate::models::{AccountDeleted, UserSettings};
use crate::services::account_service;
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/settings/", get(get_settings))
        .route("/settings/delete/", post(delete_account))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

pub async fn get_settings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<UserSettings>, AppError> {
    info!("GET /settings/ - Fetching settings for user {}", user.id);
    let settings = account_service::settings(&state.pool, user.id).await?;
    Ok(Json(settings))
}

pub async fn delete_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<AccountDeleted>, AppError> {
    info!("POST /settings/delete/ - Deleting account {}", user.id);
    account_service::delete_account(&state.pool, user.id)
        .await
        .map_err(|e| {
            warn!("Failed to delete account {}: {}", user.id, e);
            e
        })?;
    Ok(Json(AccountDeleted {
        message: "Account deleted successfully".to_string(),
        deleted: true,
    }))
}
