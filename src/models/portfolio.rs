use serde::{Deserialize, Serialize};

// Chart data for the home page: tickers and position values, largest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}
