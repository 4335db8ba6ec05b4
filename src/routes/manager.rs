use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use tracing::{info, warn};

use crate::auth::{require_auth, AuthUser};
use crate::errors::{AppError, MessageBody};
use crate::extract::{AppJson, AppPath};
use crate::models::{AssetInput, AssetView};
use crate::services::asset_service;
use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/manager/", get(list_assets))
        .route("/manager/create/", post(create_asset))
        .route("/manager/edit/:id", get(get_asset).post(update_asset))
        .route("/manager/delete/:id", post(delete_asset))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

pub async fn list_assets(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<AssetView>>, AppError> {
    info!("GET /manager/ - Fetching assets for user {}", user.id);
    let assets = asset_service::list(&state.pool, user.id).await.map_err(|e| {
        warn!("Failed to fetch assets for user {}: {}", user.id, e);
        e
    })?;
    Ok(Json(assets))
}

pub async fn create_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppJson(input): AppJson<AssetInput>,
) -> Result<(StatusCode, Json<AssetView>), AppError> {
    info!("POST /manager/create/ - Creating asset for user {}", user.id);
    let asset = asset_service::create(&state.pool, user.id, input).await.map_err(|e| {
        warn!("Failed to create asset for user {}: {}", user.id, e);
        e
    })?;
    Ok((StatusCode::CREATED, Json(asset)))
}

pub async fn get_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<AssetView>, AppError> {
    info!("GET /manager/edit/{} - Fetching asset", id);
    let asset = asset_service::fetch_for_edit(&state.pool, user.id, id).await?;
    Ok(Json(asset))
}

pub async fn update_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<AssetInput>,
) -> Result<Json<AssetView>, AppError> {
    info!("POST /manager/edit/{} - Updating asset", id);
    let asset = asset_service::update(&state.pool, user.id, id, input)
        .await
        .map_err(|e| {
            warn!("Failed to update asset {}: {}", id, e);
            e
        })?;
    Ok(Json(asset))
}

pub async fn delete_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<MessageBody>, AppError> {
    info!("POST /manager/delete/{} - Deleting asset", id);
    asset_service::delete(&state.pool, user.id, id).await.map_err(|e| {
        warn!("Failed to delete asset {}: {}", id, e);
        e
    })?;
    Ok(Json(MessageBody::new("Asset deleted successfully")))
}
