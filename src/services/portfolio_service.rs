use sqlx::SqlitePool;

use crate::db;
use crate::errors::AppError;
use crate::models::{Asset, AssetView, PortfolioSeries};

/// Price used for valuation: the live quote when present, else the cost basis.
pub fn effective_price(asset: &Asset) -> f64 {
    asset.current_price.unwrap_or(asset.average_price)
}

/// Percentage move of the current quote over the average price.
/// None without a quote or with a zero cost basis.
pub fn percent_change(average_price: f64, current_price: Option<f64>) -> Option<f64> {
    match current_price {
        Some(current) if average_price != 0.0 => {
            Some((current - average_price) / average_price * 100.0)
        }
        _ => None,
    }
}

pub fn compute_metrics(asset: Asset) -> AssetView {
    let quantity = asset.quantity as f64;
    let total_invested = quantity * asset.average_price;
    let current_value = quantity * effective_price(&asset);
    let percent_change = percent_change(asset.average_price, asset.current_price);

    AssetView {
        asset,
        percent_change,
        total_invested,
        current_value,
        result: current_value - total_invested,
    }
}

/// Tickers and position values ordered by value, largest first. The sort is
/// stable, so equal values keep the order they were given in.
pub fn build_portfolio_series(assets: &[Asset]) -> PortfolioSeries {
    let mut valued: Vec<(&str, f64)> = assets
        .iter()
        .map(|a| (a.ticker.as_str(), a.quantity as f64 * effective_price(a)))
        .collect();

    valued.sort_by(|a, b| b.1.total_cmp(&a.1));

    let (labels, values) = valued
        .into_iter()
        .map(|(ticker, value)| (ticker.to_string(), value))
        .unzip();

    PortfolioSeries { labels, values }
}

pub async fn portfolio_series(pool: &SqlitePool, user_id: i64) -> Result<PortfolioSeries, AppError> {
    let assets = db::asset_queries::fetch_all_for_user(pool, user_id).await?;
    Ok(build_portfolio_series(&assets))
}
