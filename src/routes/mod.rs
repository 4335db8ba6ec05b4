pub mod accounts;
pub mod health;
pub mod manager;
pub mod portfolio;
pub mod settings;
