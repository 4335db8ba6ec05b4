use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::db;
use crate::errors::AppError;
use crate::models::{Asset, AssetInput, AssetView};
use crate::services::portfolio_service::compute_metrics;

pub const MAX_TICKER_LEN: usize = 20;

/// Input after validation, with the ticker in its stored form.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAsset {
    pub ticker: String,
    pub quantity: i64,
    pub average_price: f64,
    pub current_price: Option<f64>,
}

pub fn normalize_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

pub fn validate(input: AssetInput) -> Result<ValidatedAsset, AppError> {
    let ticker = normalize_ticker(&input.ticker);
    if ticker.is_empty() {
        return Err(AppError::Validation("Ticker cannot be empty".into()));
    }
    if ticker.chars().count() > MAX_TICKER_LEN {
        return Err(AppError::Validation(format!(
            "Ticker must be at most {} characters",
            MAX_TICKER_LEN
        )));
    }
    if input.quantity < 0 {
        return Err(AppError::Validation("Quantity cannot be negative".into()));
    }
    if !input.average_price.is_finite() || input.average_price < 0.0 {
        return Err(AppError::Validation("Average price must be a non-negative number".into()));
    }
    if let Some(price) = input.current_price {
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Validation("Current price must be a non-negative number".into()));
        }
    }

    Ok(ValidatedAsset {
        ticker,
        quantity: input.quantity,
        average_price: input.average_price,
        current_price: input.current_price,
    })
}

/// Loads an asset the caller intends to modify. A missing row is NotFound,
/// someone else's row is Forbidden.
async fn fetch_owned_for_write(pool: &SqlitePool, user_id: i64, asset_id: i64) -> Result<Asset, AppError> {
    let asset = db::asset_queries::fetch_one(pool, asset_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Asset not found".into()))?;

    if asset.user_id != user_id {
        warn!("User {} attempted to modify asset {} owned by user {}", user_id, asset_id, asset.user_id);
        return Err(AppError::Forbidden("You do not have permission to modify this asset".into()));
    }
    Ok(asset)
}

pub async fn list(pool: &SqlitePool, user_id: i64) -> Result<Vec<AssetView>, AppError> {
    let assets = db::asset_queries::fetch_all_for_user(pool, user_id).await?;
    Ok(assets.into_iter().map(compute_metrics).collect())
}

pub async fn create(pool: &SqlitePool, user_id: i64, input: AssetInput) -> Result<AssetView, AppError> {
    let valid = validate(input)?;
    let asset = db::asset_queries::insert(
        pool,
        user_id,
        &valid.ticker,
        valid.quantity,
        valid.average_price,
        valid.current_price,
    )
    .await?;
    info!("Created asset {} ({}) for user {}", asset.id, asset.ticker, user_id);
    Ok(compute_metrics(asset))
}

/// Read path: another user's asset is reported exactly like a missing one.
pub async fn fetch_for_edit(pool: &SqlitePool, user_id: i64, asset_id: i64) -> Result<AssetView, AppError> {
    db::asset_queries::fetch_one(pool, asset_id)
        .await?
        .filter(|asset| asset.user_id == user_id)
        .map(compute_metrics)
        .ok_or_else(|| AppError::NotFound("Asset not found".into()))
}

pub async fn update(
    pool: &SqlitePool,
    user_id: i64,
    asset_id: i64,
    input: AssetInput,
) -> Result<AssetView, AppError> {
    fetch_owned_for_write(pool, user_id, asset_id).await?;
    let valid = validate(input)?;

    let asset = db::asset_queries::update(
        pool,
        asset_id,
        &valid.ticker,
        valid.quantity,
        valid.average_price,
        valid.current_price,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Asset not found".into()))?;
    Ok(compute_metrics(asset))
}

pub async fn delete(pool: &SqlitePool, user_id: i64, asset_id: i64) -> Result<(), AppError> {
    fetch_owned_for_write(pool, user_id, asset_id).await?;
    match db::asset_queries::delete(pool, asset_id).await? {
        0 => Err(AppError::NotFound("Asset not found".into())),
        _ => {
            info!("Deleted asset {} for user {}", asset_id, user_id);
            Ok(())
        }
    }
}
