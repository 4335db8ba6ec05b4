pub mod account_service;
pub mod asset_service;
pub mod portfolio_service;
