use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// A holding owned by a single user. current_price is None until a quote is entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Asset {
    pub id: i64,
    pub user_id: i64,
    pub ticker: String,
    pub quantity: i64,
    pub average_price: f64,
    pub current_price: Option<f64>,
}

/// Body of create and update requests. Updates replace every field, so a
/// missing current_price clears the stored quote.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetInput {
    pub ticker: String,
    pub quantity: i64,
    pub average_price: f64,
    #[serde(default)]
    pub current_price: Option<f64>,
}

/// An asset row together with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetView {
    #[serde(flatten)]
    pub asset: Asset,
    pub percent_change: Option<f64>,
    pub total_invested: f64,
    pub current_value: f64,
    pub result: f64,
}
